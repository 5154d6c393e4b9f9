//! Two-view state machine: the editable form and the read-only summary.
//!
//! `AppState` is owned by whichever controller handles user actions. The only
//! edges are `Form --submit(valid)--> Summary` and `Summary --reset--> Form`;
//! every other action in the wrong view is rejected and leaves state as is.

use std::fmt;

use crate::errors::StateError;
use crate::form::{
    accept, AcceptedRecord, FieldKey, MessageCatalog, SubmissionRecord, ValidationErrors,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Form,
    Summary(AcceptedRecord),
}

impl View {
    pub fn kind(&self) -> ViewKind {
        match self {
            View::Form => ViewKind::Form,
            View::Summary(_) => ViewKind::Summary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Form,
    Summary,
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewKind::Form => f.write_str("form"),
            ViewKind::Summary => f.write_str("summary"),
        }
    }
}

/// Result of a submit on the form view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    view: View,
    draft: SubmissionRecord,
    errors: ValidationErrors,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            view: View::Form,
            draft: SubmissionRecord::default(),
            errors: ValidationErrors::new(),
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_kind(&self) -> ViewKind {
        self.view.kind()
    }

    pub fn is_summary(&self) -> bool {
        matches!(self.view, View::Summary(_))
    }

    /// Current field contents as bound from user edits.
    pub fn draft(&self) -> &SubmissionRecord {
        &self.draft
    }

    /// Errors from the most recent rejected submit.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn accepted(&self) -> Option<&AcceptedRecord> {
        match &self.view {
            View::Summary(record) => Some(record),
            View::Form => None,
        }
    }

    /// Binds one field of the draft. Errors stay until the next submit.
    pub fn set_field(&mut self, field: FieldKey, value: impl Into<String>) -> Result<(), StateError> {
        self.require(ViewKind::Form, "edit")?;
        self.draft.set(field, value);
        Ok(())
    }

    pub fn clear_field(&mut self, field: FieldKey) -> Result<(), StateError> {
        self.set_field(field, String::new())
    }

    /// Validates the draft. A valid draft moves to the summary view; an
    /// invalid one keeps the form showing with the collected errors.
    pub fn submit(&mut self, messages: &MessageCatalog) -> Result<SubmitOutcome, StateError> {
        self.require(ViewKind::Form, "submit")?;
        match accept(&self.draft, messages) {
            Ok(record) => {
                self.errors.clear();
                self.view = View::Summary(record);
                tracing::debug!(from = %ViewKind::Form, to = %ViewKind::Summary, "view transition");
                Ok(SubmitOutcome::Accepted)
            }
            Err(errors) => {
                self.errors = errors;
                Ok(SubmitOutcome::Rejected)
            }
        }
    }

    /// Discards the accepted record, empties every field and shows the form.
    pub fn reset(&mut self) -> Result<(), StateError> {
        self.require(ViewKind::Summary, "reset")?;
        self.draft = SubmissionRecord::default();
        self.errors.clear();
        self.view = View::Form;
        tracing::debug!(from = %ViewKind::Summary, to = %ViewKind::Form, "view transition");
        Ok(())
    }

    fn require(&self, expected: ViewKind, action: &'static str) -> Result<(), StateError> {
        let view = self.view_kind();
        if view == expected {
            Ok(())
        } else {
            Err(StateError::WrongView { action, view })
        }
    }
}
