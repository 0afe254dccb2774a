//! Synchronous form validation
//!
//! Pure checks over the current draft and domain status. Every rule is
//! evaluated so multiple fields can be flagged at once; nothing here
//! touches the network.

use crate::state::{DomainStatus, StoreDraft};
use std::collections::HashMap;

/// Form fields that can carry an error message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Domain,
    Country,
    Category,
    Currency,
    Email,
}

/// Per-field error messages; absence of a key means "no error"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors(HashMap<FieldId, String>);

impl Errors {
    pub fn set(&mut self, field: FieldId, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear(&mut self, field: FieldId) {
        self.0.remove(&field);
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Validate the draft against the current domain status.
///
/// Returns the full error map; an empty map means the draft can be
/// submitted. The domain rules resolve in precedence order: required,
/// then format, then availability.
pub fn validate(draft: &StoreDraft, domain_status: DomainStatus) -> Errors {
    let mut errors = Errors::default();

    if draft.name.trim().len() < 3 {
        errors.set(
            FieldId::Name,
            "Store name must be at least 3 characters long",
        );
    }

    if draft.domain.is_empty() {
        errors.set(FieldId::Domain, "Subdomain is required");
    } else if !is_valid_subdomain(&draft.domain) {
        errors.set(
            FieldId::Domain,
            "Domain can only contain letters, numbers, and hyphens",
        );
    } else {
        match domain_status {
            DomainStatus::Unavailable => {
                errors.set(FieldId::Domain, "Not Available Domain, Re-enter!");
            }
            DomainStatus::Checking => {
                errors.set(FieldId::Domain, "Domain check in progress, please wait");
            }
            DomainStatus::Idle | DomainStatus::Available => {}
        }
    }

    if !is_valid_email(&draft.email) {
        errors.set(FieldId::Email, "Invalid email format!");
    }

    errors
}

/// Strip characters outside `[a-zA-Z0-9-]` and lowercase the rest.
///
/// Idempotent: sanitizing an already-sanitized label is a no-op.
pub fn sanitize_subdomain(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn is_valid_subdomain(label: &str) -> bool {
    !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Check the local@domain.tld shape: a single '@', no whitespace, and a
/// dot-separated host and tld on the domain side.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
