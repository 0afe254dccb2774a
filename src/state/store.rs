//! Store domain types: the form draft and its enumerated fields

use serde::Serialize;

/// Store country
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Country {
    #[default]
    Bangladesh,
    #[serde(rename = "United States")]
    UnitedStates,
    India,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::Bangladesh, Country::UnitedStates, Country::India];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bangladesh => "Bangladesh",
            Self::UnitedStates => "United States",
            Self::India => "India",
        }
    }
}

/// Store category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Category {
    #[default]
    Fashion,
    Electronics,
    #[serde(rename = "Home & Living")]
    HomeAndLiving,
    Beauty,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Fashion,
        Category::Electronics,
        Category::HomeAndLiving,
        Category::Beauty,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Fashion => "Fashion",
            Self::Electronics => "Electronics",
            Self::HomeAndLiving => "Home & Living",
            Self::Beauty => "Beauty",
        }
    }
}

/// Store currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Currency {
    #[default]
    BDT,
    USD,
    EUR,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::BDT, Currency::USD, Currency::EUR];

    /// Display label for the currency selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::BDT => "BDT (Taka)",
            Self::USD => "USD ($)",
            Self::EUR => "EUR (€)",
        }
    }
}

/// Raw form values as entered by the user.
///
/// The domain field holds only the subdomain label; the fully-qualified
/// domain is derived at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreDraft {
    pub name: String,
    pub domain: String,
    pub country: Country,
    pub category: Category,
    pub currency: Currency,
    pub email: String,
}

/// Submission payload for the store creation endpoint
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewStore {
    pub name: String,
    /// Fully-qualified domain (label + fixed suffix)
    pub domain: String,
    pub country: Country,
    pub category: Category,
    pub currency: Currency,
    pub email: String,
}

impl NewStore {
    /// Build the submission payload from a draft.
    ///
    /// The fully-qualified domain is computed here, exactly once: the label
    /// is trimmed and lowercased, then joined with the configured suffix.
    pub fn from_draft(draft: &StoreDraft, suffix: &str) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            domain: format!("{}.{}", draft.domain.trim().to_lowercase(), suffix),
            country: draft.country,
            category: draft.category,
            currency: draft.currency,
            email: draft.email.trim().to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let draft = StoreDraft::default();
        assert_eq!(draft.country, Country::Bangladesh);
        assert_eq!(draft.category, Category::Fashion);
        assert_eq!(draft.currency, Currency::BDT);
        assert_eq!(draft.name, "");
        assert_eq!(draft.domain, "");
        assert_eq!(draft.email, "");
    }

    #[test]
    fn test_country_serializes_with_spaces() {
        let json = serde_json::to_string(&Country::UnitedStates).unwrap();
        assert_eq!(json, "\"United States\"");
    }

    #[test]
    fn test_category_serializes_with_ampersand() {
        let json = serde_json::to_string(&Category::HomeAndLiving).unwrap();
        assert_eq!(json, "\"Home & Living\"");
    }

    #[test]
    fn test_currency_serializes_as_code_not_label() {
        assert_eq!(serde_json::to_string(&Currency::BDT).unwrap(), "\"BDT\"");
        assert_eq!(Currency::BDT.label(), "BDT (Taka)");
    }

    #[test]
    fn test_new_store_qualifies_domain() {
        let draft = StoreDraft {
            name: "  My Shop  ".to_string(),
            domain: "My-Shop".to_string(),
            email: "  Contact@MyShop.com ".to_string(),
            ..Default::default()
        };
        let store = NewStore::from_draft(&draft, "expressitbd.com");
        assert_eq!(store.name, "My Shop");
        assert_eq!(store.domain, "my-shop.expressitbd.com");
        assert_eq!(store.email, "contact@myshop.com");
    }

    #[test]
    fn test_new_store_payload_shape() {
        let draft = StoreDraft {
            name: "Glore".to_string(),
            domain: "glore".to_string(),
            country: Country::UnitedStates,
            category: Category::HomeAndLiving,
            currency: Currency::USD,
            email: "hi@glore.com".to_string(),
        };
        let store = NewStore::from_draft(&draft, "expressitbd.com");
        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(json["domain"], "glore.expressitbd.com");
        assert_eq!(json["country"], "United States");
        assert_eq!(json["category"], "Home & Living");
        assert_eq!(json["currency"], "USD");
    }
}
