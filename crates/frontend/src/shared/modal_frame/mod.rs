use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    /// Confirmation dialogs
    Small,
    #[default]
    Medium,
    /// Lookup tables
    Large,
}

impl ModalSize {
    fn class(&self) -> &'static str {
        match self {
            ModalSize::Small => "modal modal--sm",
            ModalSize::Medium => "modal modal--md",
            ModalSize::Large => "modal modal--lg",
        }
    }
}

/// Overlay plus surface with a title bar and a close button.
///
/// The overlay closes the modal only when both press and release land on
/// the overlay itself, so selecting text inside the surface is safe.
#[component]
pub fn ModalFrame(
    #[prop(into)] title: String,
    size: ModalSize,
    z_index: i32,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let pressed_on_overlay = StoredValue::new(false);

    let is_direct = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=move |ev| pressed_on_overlay.set_value(is_direct(&ev))
            on:click=move |ev| {
                let close = pressed_on_overlay.get_value() && is_direct(&ev);
                pressed_on_overlay.set_value(false);
                if close {
                    on_close.run(());
                }
            }
        >
            <div class=size.class() role="dialog" on:click=|ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h3 class="modal__title">{title}</h3>
                    <button class="modal__close" title="Close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
