use crate::shared::store::{use_store, StoreContext};
use contracts::domain::a005_workflow::{Approver, WorkflowDefinition, WorkflowStepDefinition};
use contracts::domain::common::EntityKind;
use contracts::shared::approval::ApprovalTree;
use contracts::shared::form::FormErrors;
use leptos::prelude::*;

/// ViewModel for the workflow editor
///
/// Edits a detached copy; the store only sees it on Save.
#[derive(Clone, Copy)]
pub struct WorkflowEditorViewModel {
    store: StoreContext,
    pub draft: RwSignal<WorkflowDefinition>,
    pub errors: RwSignal<FormErrors>,
    pub error: RwSignal<Option<String>>,
}

impl WorkflowEditorViewModel {
    pub fn new(id: Option<u32>, country: &str, entity: EntityKind) -> Self {
        let store = use_store();
        let error = RwSignal::new(None);
        let existing = id.and_then(|id| store.store.with_untracked(|s| s.workflow(id).cloned()));
        let draft = match (id, existing) {
            (_, Some(workflow)) => workflow,
            (Some(id), None) => {
                log::warn!("workflow {} not found, starting a new one", id);
                error.set(Some(format!("Workflow {id} not found; a new workflow was started")));
                WorkflowDefinition::new(country, entity)
            }
            (None, None) => WorkflowDefinition::new(country, entity),
        };

        Self {
            store,
            draft: RwSignal::new(draft),
            errors: RwSignal::new(FormErrors::new()),
            error,
        }
    }

    pub fn is_new(&self) -> Signal<bool> {
        let draft = self.draft;
        Signal::derive(move || draft.with(WorkflowDefinition::is_new))
    }

    pub fn step_count(&self) -> Signal<usize> {
        let draft = self.draft;
        Signal::derive(move || draft.with(|d| d.steps.len()))
    }

    pub fn preview(&self) -> Signal<ApprovalTree> {
        let draft = self.draft;
        Signal::derive(move || draft.with(WorkflowDefinition::to_approval_tree))
    }

    pub fn field_error(&self, key: String) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(&key).map(str::to_string)))
    }

    pub fn add_step(&self) {
        self.draft.update(|d| {
            d.add_step();
        });
    }

    pub fn remove_step(&self, index: usize) {
        self.draft.update(|d| {
            d.remove_step(index);
        });
    }

    pub fn move_step_up(&self, index: usize) {
        self.draft.update(|d| {
            d.move_step_up(index);
        });
    }

    pub fn move_step_down(&self, index: usize) {
        self.draft.update(|d| {
            d.move_step_down(index);
        });
    }

    pub fn update_step(&self, index: usize, f: impl FnOnce(&mut WorkflowStepDefinition)) {
        self.draft.update(|d| {
            if let Some(step) = d.steps.get_mut(index) {
                f(step);
            }
        });
    }

    /// Returns `false` for a blank name or a duplicate approver.
    pub fn add_approver(&self, step: usize, name: &str, title: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let approver = Approver::new(name, title.trim());
        self.draft
            .try_update(|d| d.add_approver(step, approver))
            .unwrap_or(false)
    }

    pub fn remove_approver(&self, step: usize, index: usize) {
        self.draft.update(|d| {
            d.remove_approver(step, index);
        });
    }

    /// Validates and stores the draft; returns the saved id.
    pub fn save_command(&self) -> Option<u32> {
        let draft = self.draft.get_untracked();
        match self.store.mutate(|s| s.save_workflow(draft)) {
            Ok(id) => {
                log::info!("workflow {} saved", id);
                self.draft.update(|d| d.id = id);
                self.errors.set(FormErrors::new());
                self.error.set(None);
                Some(id)
            }
            Err(errors) => {
                self.error.set(Some(errors.to_string()));
                self.errors.set(errors);
                None
            }
        }
    }
}
