//! DOM side of the declarative form engine
//!
//! Pages hand a static [`FieldTable`](contracts::shared::form::FieldTable)
//! and a `RwSignal<FormState>` to [`DynamicForm`]; every edit flows back
//! through `FieldTable::apply_change`.

pub mod dynamic_form;
pub mod field_renderer;
pub mod nested_rows;
pub mod object_select_modal;

pub use dynamic_form::DynamicForm;
pub use field_renderer::FieldRenderer;
pub use nested_rows::NestedRowsEditor;
pub use object_select_modal::open_object_select;
