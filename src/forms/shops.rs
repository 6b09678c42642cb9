use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::shop::{DEFAULT_SHOP_NAME, NewShop, UpdateShop};
use crate::forms::{NAME_MAX_LEN, optional_inline_text, sanitize_inline_text};

const CONTACT_MAX_LEN: u64 = 256;
const URL_MAX_LEN: u64 = 2048;

/// Result type returned by the shop form helpers.
pub type ShopFormResult<T> = Result<T, ShopFormError>;

/// Errors that can occur while processing shop forms.
#[derive(Debug, Error)]
pub enum ShopFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("shop name cannot be empty")]
    EmptyName,
}

/// Form payload emitted when creating or editing a shop.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ShopForm {
    /// Display name; a new shop without one gets the default name.
    #[validate(length(max = NAME_MAX_LEN))]
    #[serde(default)]
    pub name: String,
    #[validate(length(max = CONTACT_MAX_LEN))]
    #[serde(default)]
    pub phone_number: Option<String>,
    #[validate(length(max = CONTACT_MAX_LEN))]
    #[serde(default)]
    pub address: Option<String>,
    #[validate(length(max = URL_MAX_LEN))]
    #[serde(default)]
    pub cover_image: Option<String>,
    #[validate(length(max = URL_MAX_LEN))]
    #[serde(default)]
    pub logo: Option<String>,
}

impl ShopForm {
    /// Validates the payload into an insert for `user_id`.
    pub fn into_new_shop(self, user_id: &str) -> ShopFormResult<NewShop> {
        self.validate()?;

        let name = match sanitize_inline_text(&self.name) {
            name if name.is_empty() => DEFAULT_SHOP_NAME.to_string(),
            name => name,
        };

        let mut shop = NewShop::new(user_id, name);
        shop.phone_number = optional_inline_text(self.phone_number.as_deref());
        shop.address = optional_inline_text(self.address.as_deref());
        shop.cover_image = optional_inline_text(self.cover_image.as_deref());
        shop.logo = optional_inline_text(self.logo.as_deref());
        Ok(shop)
    }

    /// Validates the payload into a patch of the shop profile.
    ///
    /// Blank optional fields clear the stored value.
    pub fn into_update_shop(self) -> ShopFormResult<UpdateShop> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ShopFormError::EmptyName);
        }

        Ok(UpdateShop {
            name: Some(name),
            phone_number: Some(optional_inline_text(self.phone_number.as_deref())),
            address: Some(optional_inline_text(self.address.as_deref())),
            cover_image: Some(optional_inline_text(self.cover_image.as_deref())),
            logo: Some(optional_inline_text(self.logo.as_deref())),
            ..UpdateShop::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shop::ShopStatus;

    #[test]
    fn blank_name_gets_default_on_create() {
        let shop = ShopForm::default()
            .into_new_shop("user-1")
            .expect("valid shop");

        assert_eq!(shop.name, DEFAULT_SHOP_NAME);
        assert_eq!(shop.user_id, "user-1");
        assert_eq!(shop.status, ShopStatus::Active);
    }

    #[test]
    fn create_sanitizes_contacts() {
        let form = ShopForm {
            name: " Corner  Cafe ".to_string(),
            phone_number: Some(" +1 555 0100 ".to_string()),
            address: Some("  ".to_string()),
            ..ShopForm::default()
        };

        let shop = form.into_new_shop("user-1").expect("valid shop");

        assert_eq!(shop.name, "Corner Cafe");
        assert_eq!(shop.phone_number.as_deref(), Some("+1 555 0100"));
        assert!(shop.address.is_none());
    }

    #[test]
    fn update_clears_blank_fields() {
        let form = ShopForm {
            name: "Corner Cafe".to_string(),
            logo: Some(String::new()),
            ..ShopForm::default()
        };

        let patch = form.into_update_shop().expect("valid patch");

        assert_eq!(patch.name.as_deref(), Some("Corner Cafe"));
        assert_eq!(patch.logo, Some(None));
        assert_eq!(patch.address, Some(None));
        assert!(patch.status.is_none());
        assert!(patch.menu_ids.is_none());
    }

    #[test]
    fn update_rejects_blank_name() {
        let form = ShopForm {
            name: "   ".to_string(),
            ..ShopForm::default()
        };

        assert!(matches!(form.into_update_shop(), Err(ShopFormError::EmptyName)));
    }

    #[test]
    fn overlong_name_is_rejected() {
        let form = ShopForm {
            name: "x".repeat(200),
            ..ShopForm::default()
        };

        assert!(matches!(
            form.into_new_shop("user-1"),
            Err(ShopFormError::Validation(_))
        ));
    }
}
