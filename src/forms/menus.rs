use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::forms::{NAME_MAX_LEN, sanitize_inline_text};

/// Result type returned by the menu form helpers.
pub type MenuFormResult<T> = Result<T, MenuFormError>;

/// Errors that can occur while processing menu forms.
#[derive(Debug, Error)]
pub enum MenuFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("menu name cannot be empty")]
    EmptyName,
}

/// Form payload emitted when renaming a menu.
#[derive(Debug, Deserialize, Validate)]
pub struct MenuForm {
    /// Name entered by the owner.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
}

impl MenuForm {
    /// Validates and sanitizes the payload into the new menu name.
    pub fn into_menu_name(self) -> MenuFormResult<String> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(MenuFormError::EmptyName);
        }

        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_form_sanitizes_name() {
        let form = MenuForm {
            name: "  Summer   specials ".to_string(),
        };

        assert_eq!(form.into_menu_name().expect("valid name"), "Summer specials");
    }

    #[test]
    fn menu_form_rejects_blank_name() {
        let form = MenuForm {
            name: "   ".to_string(),
        };

        assert!(matches!(form.into_menu_name(), Err(MenuFormError::EmptyName)));
    }

    #[test]
    fn menu_form_rejects_empty_name() {
        let form = MenuForm {
            name: String::new(),
        };

        assert!(matches!(form.into_menu_name(), Err(MenuFormError::Validation(_))));
    }
}
