//! Declarative form engine
//!
//! - `definition` - field-definition tables (typed union of field kinds)
//! - `state` - current form values
//! - `evaluator` - conditional show/hide and disable (+ atomic clear)
//! - `renderer` - pure render model consumed by the UI
//! - `validation` - inline form errors

pub mod definition;
pub mod evaluator;
pub mod renderer;
pub mod state;
pub mod validation;

pub use definition::{
    CascadeRule, DisableCondition, FieldDefinition, FieldKind, FieldTable, ObjectColumn,
    ObjectConfig, SchemaError, Section, ShowCondition,
};
pub use evaluator::{is_disabled, should_show};
pub use renderer::{render_field, RenderedField, SelectOption, Widget, NO, YES};
pub use state::{record, FormState, FormValue, Record, RequestForm};
pub use validation::FormErrors;
