//! Confirmation gate for destructive actions

use crate::shared::modal_frame::ModalSize;
use crate::shared::modal_stack::{ModalHandle, ModalStackService};
use contracts::shared::confirm::ConfirmAction;
use leptos::prelude::*;
use thaw::*;

/// Pushes a confirmation dialog; `on_confirm` receives the trimmed comment.
pub fn open_confirm(modal: ModalStackService, action: ConfirmAction, on_confirm: Callback<String>) {
    let title = action.title.clone();
    modal.push(title, ModalSize::Small, move |handle| {
        view! { <ConfirmDialog action=action.clone() handle=handle on_confirm=on_confirm /> }.into_any()
    });
}

#[component]
fn ConfirmDialog(action: ConfirmAction, handle: ModalHandle, on_confirm: Callback<String>) -> impl IntoView {
    let comment = RwSignal::new(String::new());
    let action = StoredValue::new(action);
    let can_confirm = Signal::derive(move || action.with_value(|a| a.can_confirm(&comment.get())));

    let confirm = move |_| {
        if !can_confirm.get_untracked() {
            return;
        }
        on_confirm.run(comment.get_untracked().trim().to_string());
        handle.close();
    };

    view! {
        <div class="confirm-dialog">
            <p class="confirm-dialog__message">{action.with_value(|a| a.message.clone())}</p>
            <Show when=move || action.with_value(|a| a.comment_required)>
                <div class="form__group">
                    <label class="form__label">
                        "Reason" <span class="form__required">"*"</span>
                    </label>
                    <Textarea value=comment placeholder="Required" />
                </div>
            </Show>
            <div class="confirm-dialog__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.close()>
                    "Back"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    class=if action.with_value(|a| a.destructive) { "button--danger" } else { "" }
                    disabled=Signal::derive(move || !can_confirm.get())
                    on_click=confirm
                >
                    {action.with_value(|a| a.confirm_label)}
                </Button>
            </div>
        </div>
    }
}
