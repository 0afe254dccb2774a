//! Form field value objects

use crate::validate::sanitize_subdomain;

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// Subdomain label; input is filtered to `[a-z0-9-]` as it is typed
    Subdomain(String),
    /// One of a fixed set of options
    Choice {
        options: Vec<&'static str>,
        selected: usize,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new subdomain field
    pub fn subdomain(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Subdomain(String::new()),
        }
    }

    /// Create a new fixed-choice field
    pub fn choice(name: &str, label: &str, options: Vec<&'static str>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Choice {
                options,
                selected: 0,
            },
        }
    }

    /// Get the text value (returns empty string for choice fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Subdomain(s) => s,
            FieldValue::Choice { .. } => "",
        }
    }

    /// Get the selected option index (returns 0 for text fields)
    pub fn selected_index(&self) -> usize {
        match &self.value {
            FieldValue::Choice { selected, .. } => *selected,
            _ => 0,
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Subdomain(s) => {
                if c.is_ascii_alphanumeric() || c == '-' {
                    s.push(c.to_ascii_lowercase());
                }
            }
            FieldValue::Choice { .. } => {
                // Choice fields are cycled, not typed into
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Subdomain(s) => {
                s.pop();
            }
            FieldValue::Choice { .. } => {}
        }
    }

    /// Replace the whole value, filtering subdomain input
    #[allow(dead_code)]
    pub fn set_text(&mut self, value: String) {
        match &mut self.value {
            FieldValue::Text(s) => *s = value,
            FieldValue::Subdomain(s) => *s = sanitize_subdomain(&value),
            FieldValue::Choice { .. } => {}
        }
    }

    /// Select the next option (wraps around)
    pub fn next_option(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            *selected = (*selected + 1) % options.len();
        }
    }

    /// Select the previous option (wraps around)
    pub fn prev_option(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            *selected = selected.checked_sub(1).unwrap_or(options.len() - 1);
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Subdomain(s) => s.clear(),
            FieldValue::Choice { selected, .. } => *selected = 0,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Subdomain(s) => s.clone(),
            FieldValue::Choice { options, selected } => {
                options.get(*selected).copied().unwrap_or("").to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_push_and_pop() {
        let mut field = FormField::text("name", "Store Name");
        field.push_char('H');
        field.push_char('i');
        assert_eq!(field.as_text(), "Hi");
        field.pop_char();
        assert_eq!(field.as_text(), "H");
    }

    #[test]
    fn test_subdomain_field_filters_input() {
        let mut field = FormField::subdomain("domain", "Store Subdomain");
        for c in "My Shop_1!".chars() {
            field.push_char(c);
        }
        assert_eq!(field.as_text(), "myshop1");
    }

    #[test]
    fn test_subdomain_field_keeps_hyphens() {
        let mut field = FormField::subdomain("domain", "Store Subdomain");
        for c in "my-shop".chars() {
            field.push_char(c);
        }
        assert_eq!(field.as_text(), "my-shop");
    }

    #[test]
    fn test_subdomain_set_text_sanitizes() {
        let mut field = FormField::subdomain("domain", "Store Subdomain");
        field.set_text("Pasted Value!".to_string());
        assert_eq!(field.as_text(), "pastedvalue");
    }

    #[test]
    fn test_choice_cycles_and_wraps() {
        let mut field = FormField::choice("currency", "Currency", vec!["BDT", "USD", "EUR"]);
        assert_eq!(field.display_value(), "BDT");
        field.next_option();
        field.next_option();
        assert_eq!(field.selected_index(), 2);
        field.next_option();
        assert_eq!(field.selected_index(), 0);
        field.prev_option();
        assert_eq!(field.display_value(), "EUR");
    }

    #[test]
    fn test_choice_ignores_typed_characters() {
        let mut field = FormField::choice("country", "Country", vec!["Bangladesh", "India"]);
        field.push_char('x');
        field.pop_char();
        assert_eq!(field.display_value(), "Bangladesh");
    }

    #[test]
    fn test_clear_resets_value() {
        let mut field = FormField::text("email", "Email");
        field.push_char('a');
        field.clear();
        assert_eq!(field.as_text(), "");

        let mut choice = FormField::choice("currency", "Currency", vec!["BDT", "USD"]);
        choice.next_option();
        choice.clear();
        assert_eq!(choice.selected_index(), 0);
    }
}
