use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::forms::{DESCRIPTION_MAX_LEN, NAME_MAX_LEN, optional_multiline_text, sanitize_inline_text};

/// Result type returned by the collection form helpers.
pub type CollectionFormResult<T> = Result<T, CollectionFormError>;

/// Errors that can occur while processing collection forms.
#[derive(Debug, Error)]
pub enum CollectionFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("collection name cannot be empty")]
    EmptyName,
}

/// Sanitized name and description of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDetails {
    pub name: String,
    pub description: Option<String>,
}

/// Form payload emitted when editing a collection.
#[derive(Debug, Deserialize, Validate)]
pub struct CollectionForm {
    /// Identifier of the collection being edited.
    #[validate(length(min = 1))]
    pub collection_id: String,
    /// Name entered by the owner.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Optional description shown under the collection title.
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    #[serde(default)]
    pub description: Option<String>,
}

impl CollectionForm {
    /// Validates and sanitizes the payload into collection details.
    pub fn into_details(self) -> CollectionFormResult<CollectionDetails> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(CollectionFormError::EmptyName);
        }

        Ok(CollectionDetails {
            name,
            description: optional_multiline_text(self.description.as_deref()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_form_converts() {
        let form = CollectionForm {
            collection_id: "col_1".to_string(),
            name: " Desserts ".to_string(),
            description: Some("  ".to_string()),
        };

        let details = form.into_details().expect("valid collection");

        assert_eq!(details.name, "Desserts");
        assert!(details.description.is_none());
    }

    #[test]
    fn collection_form_rejects_blank_name() {
        let form = CollectionForm {
            collection_id: "col_1".to_string(),
            name: " \t ".to_string(),
            description: None,
        };

        assert!(matches!(form.into_details(), Err(CollectionFormError::EmptyName)));
    }
}
