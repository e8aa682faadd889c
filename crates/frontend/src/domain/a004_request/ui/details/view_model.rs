use crate::shared::store::{now, use_store, StoreContext};
use contracts::domain::a004_request::{RequestError, RequestRecord};
use contracts::domain::common::EntityKind;
use contracts::shared::form::{FormErrors, FormState, Record, RequestForm};
use leptos::prelude::*;

/// ViewModel for the request details page
///
/// The form is edited locally and written to the store on Save/Submit;
/// status transitions read the stored record.
#[derive(Clone, Copy)]
pub struct RequestDetailsViewModel {
    store: StoreContext,
    pub id: StoredValue<String>,
    pub record: Memo<Option<RequestRecord>>,
    pub values: RwSignal<FormState>,
    pub rows: RwSignal<Vec<Record>>,
    pub errors: RwSignal<FormErrors>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    pub active_tab: RwSignal<&'static str>,
}

impl RequestDetailsViewModel {
    pub fn new(id: String) -> Self {
        let store = use_store();
        let key = StoredValue::new(id);
        let record = Memo::new(move |_| {
            key.with_value(|id| store.store.with(|s| s.request(id).cloned()))
        });

        let vm = Self {
            store,
            id: key,
            record,
            values: RwSignal::new(FormState::new()),
            rows: RwSignal::new(Vec::new()),
            errors: RwSignal::new(FormErrors::new()),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            active_tab: RwSignal::new("form"),
        };
        vm.load();
        vm
    }

    /// Copies the stored form into the editable signals.
    pub fn load(&self) {
        let form = self.record.with_untracked(|r| r.as_ref().map(|r| r.form.clone()));
        match form {
            Some(form) => {
                self.values.set(form.values);
                self.rows.set(form.rows);
            }
            None => self
                .id
                .with_value(|id| log::warn!("request {} not found", id)),
        }
    }

    pub fn entity(&self) -> Signal<Option<EntityKind>> {
        let record = self.record;
        Signal::derive(move || record.with(|r| r.as_ref().map(RequestRecord::entity_kind)))
    }

    pub fn is_editable(&self) -> Signal<bool> {
        let record = self.record;
        Signal::derive(move || record.with(|r| r.as_ref().is_some_and(RequestRecord::is_editable)))
    }

    pub fn set_tab(&self, tab: &'static str) {
        self.active_tab.set(tab);
    }

    fn form(&self) -> RequestForm {
        RequestForm {
            values: self.values.get_untracked(),
            rows: self.rows.get_untracked(),
        }
    }

    /// Pretty JSON of the form as currently edited
    pub fn form_json(&self) -> String {
        let form = RequestForm {
            values: self.values.get(),
            rows: self.rows.get(),
        };
        serde_json::to_string_pretty(&form).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }

    /// Shows the outcome; validation failures go inline under the fields.
    fn report(&self, result: Result<(), RequestError>, success: &str) {
        match result {
            Ok(()) => {
                self.errors.set(FormErrors::new());
                self.error.set(None);
                self.notice.set(Some(success.to_string()));
            }
            Err(RequestError::Validation(errors)) => {
                self.error
                    .set(Some(format!("Please fill in {} required field(s)", errors.len())));
                self.errors.set(errors);
                self.notice.set(None);
            }
            Err(e) => {
                log::warn!("{}", e);
                self.error.set(Some(e.to_string()));
                self.notice.set(None);
            }
        }
    }

    pub fn save_command(&self) {
        let id = self.id.get_value();
        let form = self.form();
        let result = self.store.mutate(|s| s.save_draft(&id, form));
        self.report(result, "Draft saved");
    }

    /// Saves the current form, then submits it for approval.
    pub fn submit_command(&self) {
        let id = self.id.get_value();
        let form = self.form();
        let result = self.store.mutate(|s| {
            s.save_draft(&id, form)?;
            s.submit_request(&id)
        });
        self.report(result, "Submitted for approval");
    }

    pub fn approve_command(&self) {
        let id = self.id.get_value();
        let result = self.store.mutate(|s| s.approve_request(&id, now()));
        self.report(result, "Step approved");
    }

    pub fn reject_command(&self, reason: &str) {
        let id = self.id.get_value();
        let result = self.store.mutate(|s| s.reject_request(&id, reason, now()));
        self.report(result, "Request rejected");
    }

    pub fn cancel_command(&self) {
        let id = self.id.get_value();
        let result = self.store.mutate(|s| s.cancel_request(&id));
        self.report(result, "Request cancelled");
    }

    pub fn sync_command(&self) {
        let id = self.id.get_value();
        let result = self.store.mutate(|s| s.sync_request(&id));
        self.report(result, "Synced to ERP");
    }
}
