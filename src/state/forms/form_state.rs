//! Form state management and the store creation form

use super::field::FormField;
use crate::state::{Category, Country, Currency, StoreDraft};
use crate::validate::FieldId;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The store creation form
#[derive(Debug, Clone)]
pub struct StoreCreateForm {
    pub name: FormField,
    pub domain: FormField,
    pub country: FormField,
    pub category: FormField,
    pub currency: FormField,
    pub email: FormField,
    pub active_field_index: usize,
}

impl StoreCreateForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Store Name"),
            domain: FormField::subdomain("domain", "Store Subdomain"),
            country: FormField::choice(
                "country",
                "Country",
                Country::ALL.iter().map(|c| c.label()).collect(),
            ),
            category: FormField::choice(
                "category",
                "Category",
                Category::ALL.iter().map(|c| c.label()).collect(),
            ),
            currency: FormField::choice(
                "currency",
                "Currency",
                Currency::ALL.iter().map(|c| c.label()).collect(),
            ),
            email: FormField::text("email", "Email"),
            active_field_index: 0,
        }
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == 6
    }

    /// The error-map key for the currently active field, if it is a field
    pub fn active_field_id(&self) -> Option<FieldId> {
        Self::field_id(self.active_field_index)
    }

    /// Map a field index to its error-map key
    pub fn field_id(index: usize) -> Option<FieldId> {
        match index {
            0 => Some(FieldId::Name),
            1 => Some(FieldId::Domain),
            2 => Some(FieldId::Country),
            3 => Some(FieldId::Category),
            4 => Some(FieldId::Currency),
            5 => Some(FieldId::Email),
            _ => None,
        }
    }

    /// Snapshot the current values as a typed draft
    pub fn to_draft(&self) -> StoreDraft {
        StoreDraft {
            name: self.name.as_text().to_string(),
            domain: self.domain.as_text().to_string(),
            country: Country::ALL[self.country.selected_index()],
            category: Category::ALL[self.category.selected_index()],
            currency: Currency::ALL[self.currency.selected_index()],
            email: self.email.as_text().to_string(),
        }
    }

    /// Restore the form to its default values
    pub fn reset(&mut self) {
        self.name.clear();
        self.domain.clear();
        self.country.clear();
        self.category.clear();
        self.currency.clear();
        self.email.clear();
        self.active_field_index = 0;
    }
}

impl Default for StoreCreateForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for StoreCreateForm {
    fn field_count(&self) -> usize {
        7 // six fields plus the submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(6);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.name,
            1 => &mut self.domain,
            2 => &mut self.country,
            3 => &mut self.category,
            4 => &mut self.currency,
            // For the submit row (index 6), return email as dummy (won't be edited)
            _ => &mut self.email,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.domain),
            2 => Some(&self.country),
            3 => Some(&self.category),
            4 => Some(&self.currency),
            5 => Some(&self.email),
            // Index 6 is the submit row, no FormField for it
            _ => None,
        }
    }
}
