//! Application state definitions

use crate::state::{DomainCheck, StoreCreateForm};
use crate::validate::Errors;

/// Kind of transient notice shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A form-level message (success confirmation or generic failure)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The store creation form
    pub form: StoreCreateForm,
    /// Per-field error messages
    pub errors: Errors,
    /// Debounced subdomain availability check
    pub domain_check: DomainCheck,
    /// True while a create request is in flight; guards the submit action
    pub submitting: bool,
    /// Form-level notice shown in the status bar
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn notice_success(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind: NoticeKind::Success,
            text: text.into(),
        });
    }

    pub fn notice_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind: NoticeKind::Error,
            text: text.into(),
        });
    }

    /// Discard the whole form session: values back to defaults, domain
    /// status to idle, error map empty.
    pub fn reset_form(&mut self) {
        self.form.reset();
        self.domain_check.reset();
        self.errors.clear_all();
    }
}
