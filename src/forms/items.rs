use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::ids::{IdKind, new_id};
use crate::domain::menu::{MenuItem, MenuItemVariant};
use crate::forms::{
    DESCRIPTION_MAX_LEN, NAME_MAX_LEN, optional_inline_text, optional_multiline_text,
    sanitize_inline_text,
};

/// Result type returned by the dish form helpers.
pub type MenuItemFormResult<T> = Result<T, MenuItemFormError>;

/// Errors that can occur while processing dish forms.
#[derive(Debug, Error)]
pub enum MenuItemFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("dish name cannot be empty")]
    EmptyName,
    /// A dish needs at least one price variant.
    #[error("dish needs at least one price")]
    MissingVariant,
    /// The edited variant is not part of the dish.
    #[error("variant `{0}` not found")]
    UnknownVariant(String),
}

/// Largest accepted price. Prices are stored as floats, which keep cents
/// exact only well below this bound.
pub const PRICE_MAX: i64 = 1_000_000_000;

/// Parse a price typed by the owner.
///
/// Blank or unreadable input, negative amounts and amounts above
/// [`PRICE_MAX`] yield `None`; anything else is rounded to two decimal places.
pub fn parse_price(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()?;
    if value < Decimal::ZERO || value > Decimal::from(PRICE_MAX) {
        return None;
    }

    // abs() folds "-0" into 0.
    let mut price = value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .abs();
    price.rescale(2);
    Some(price)
}

/// One price row of the dish form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct VariantForm {
    /// Identifier of an existing variant; a new one is minted when missing.
    #[serde(default)]
    pub id: Option<String>,
    /// Label such as "Large"; ignored in single-price mode.
    #[validate(length(max = NAME_MAX_LEN))]
    #[serde(default)]
    pub name: Option<String>,
    /// Raw price text as typed.
    #[serde(default)]
    pub price: Option<String>,
}

impl From<&MenuItemVariant> for VariantForm {
    fn from(variant: &MenuItemVariant) -> Self {
        Self {
            id: Some(variant.id.clone()),
            name: variant.name.clone(),
            price: variant.price.map(|price| price.to_string()),
        }
    }
}

impl VariantForm {
    fn into_variant(self, single_price: bool) -> MenuItemVariant {
        MenuItemVariant {
            id: self
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| new_id(IdKind::Variant)),
            name: if single_price {
                None
            } else {
                optional_inline_text(self.name.as_deref())
            },
            price: self.price.as_deref().and_then(parse_price),
        }
    }
}

/// Form payload emitted when saving a dish.
#[derive(Debug, Deserialize, Validate)]
pub struct MenuItemForm {
    /// Dish name entered by the owner.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    #[serde(default)]
    pub description: Option<String>,
    /// Collection the dish is listed under.
    #[serde(default)]
    pub collection_id: Option<String>,
    /// Public URL of an uploaded photo.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Only the first variant is kept, without a label, when set.
    #[serde(default)]
    pub single_price: bool,
    #[validate(nested)]
    #[serde(default)]
    pub variants: Vec<VariantForm>,
}

impl MenuItemForm {
    /// Validates the payload into a brand new dish with a fresh identifier.
    pub fn into_new_menu_item(self) -> MenuItemFormResult<MenuItem> {
        self.into_menu_item(new_id(IdKind::Item))
    }

    /// Validates the payload into the dish identified by `item_id`.
    pub fn into_menu_item(self, item_id: impl Into<String>) -> MenuItemFormResult<MenuItem> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(MenuItemFormError::EmptyName);
        }

        let single_price = self.single_price;
        let mut variants: Vec<MenuItemVariant> = self
            .variants
            .into_iter()
            .map(|variant| variant.into_variant(single_price))
            .collect();
        if single_price {
            variants.truncate(1);
        }
        if variants.is_empty() {
            return Err(MenuItemFormError::MissingVariant);
        }

        Ok(MenuItem {
            id: item_id.into(),
            name,
            description: optional_multiline_text(self.description.as_deref()),
            variants,
            collection_id: self
                .collection_id
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty()),
            image_url: optional_inline_text(self.image_url.as_deref()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(raw: &str) -> VariantForm {
        VariantForm {
            id: None,
            name: None,
            price: Some(raw.to_string()),
        }
    }

    #[test]
    fn parse_price_rounds_to_cents() {
        assert_eq!(parse_price("4.555"), Some(Decimal::new(456, 2)));
        assert_eq!(parse_price(" 6.5 "), Some(Decimal::new(650, 2)));
        assert_eq!(parse_price("12").map(|value| value.to_string()), Some("12.00".to_string()));
    }

    #[test]
    fn parse_price_coerces_negative_to_none() {
        assert_eq!(parse_price("-5"), None);
        assert_eq!(parse_price("-0.01"), None);
    }

    #[test]
    fn parse_price_coerces_out_of_range_to_none() {
        assert_eq!(parse_price("12345678901234567.89"), None);
        assert_eq!(parse_price("1e12"), None);
        assert_eq!(
            parse_price("1000000000").map(|value| value.to_string()),
            Some("1000000000.00".to_string())
        );
    }

    #[test]
    fn max_price_keeps_cents_through_storage() {
        let price = parse_price("999999999.99").unwrap();
        let json = serde_json::to_string(&MenuItemVariant {
            id: "var_1".to_string(),
            name: None,
            price: Some(price),
        })
        .unwrap();
        let stored: MenuItemVariant = serde_json::from_str(&json).unwrap();

        assert_eq!(stored.price.map(|value| value.to_string()).as_deref(), Some("999999999.99"));
    }

    #[test]
    fn parse_price_treats_blank_and_garbage_as_none() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("   "), None);
        assert_eq!(parse_price("cheap"), None);
    }

    #[test]
    fn parse_price_accepts_zero() {
        assert_eq!(parse_price("-0"), Some(Decimal::ZERO));
        assert_eq!(parse_price("0").map(|value| value.to_string()), Some("0.00".to_string()));
    }

    #[test]
    fn menu_item_form_builds_dish() {
        let form = MenuItemForm {
            name: "  Tomato   soup ".to_string(),
            description: Some(" Creamy \n\n\n with croutons ".to_string()),
            collection_id: Some("col_1".to_string()),
            image_url: Some("  ".to_string()),
            single_price: false,
            variants: vec![
                VariantForm {
                    id: Some("var_1".to_string()),
                    name: Some(" Cup ".to_string()),
                    price: Some("4".to_string()),
                },
                VariantForm {
                    id: None,
                    name: Some("Bowl".to_string()),
                    price: Some("-5".to_string()),
                },
            ],
        };

        let item = form.into_menu_item("item_7").expect("valid dish");

        assert_eq!(item.id, "item_7");
        assert_eq!(item.name, "Tomato soup");
        assert_eq!(item.description.as_deref(), Some("Creamy\n\nwith croutons"));
        assert_eq!(item.collection_id.as_deref(), Some("col_1"));
        assert!(item.image_url.is_none());
        assert_eq!(item.variants.len(), 2);
        assert_eq!(item.variants[0].id, "var_1");
        assert_eq!(item.variants[0].name.as_deref(), Some("Cup"));
        assert_eq!(item.variants[0].price, Some(Decimal::new(4, 0)));
        assert!(item.variants[1].id.starts_with("var_"));
        assert!(item.variants[1].price.is_none());
    }

    #[test]
    fn menu_item_form_single_price_keeps_first_variant() {
        let form = MenuItemForm {
            name: "Chips".to_string(),
            description: None,
            collection_id: None,
            image_url: None,
            single_price: true,
            variants: vec![
                VariantForm {
                    name: Some("Small".to_string()),
                    ..price("3.5")
                },
                price("5"),
            ],
        };

        let item = form.into_new_menu_item().expect("valid dish");

        assert!(item.id.starts_with("item_"));
        assert_eq!(item.variants.len(), 1);
        assert!(item.variants[0].name.is_none());
        assert_eq!(item.base_price(), "3.50");
    }

    #[test]
    fn menu_item_form_rejects_blank_name() {
        let form = MenuItemForm {
            name: "   ".to_string(),
            description: None,
            collection_id: None,
            image_url: None,
            single_price: true,
            variants: vec![price("1")],
        };

        assert!(matches!(form.into_new_menu_item(), Err(MenuItemFormError::EmptyName)));
    }

    #[test]
    fn menu_item_form_requires_a_variant() {
        let form = MenuItemForm {
            name: "Chips".to_string(),
            description: None,
            collection_id: None,
            image_url: None,
            single_price: false,
            variants: Vec::new(),
        };

        assert!(matches!(
            form.into_new_menu_item(),
            Err(MenuItemFormError::MissingVariant)
        ));
    }

    #[test]
    fn variant_form_from_variant_keeps_price_text() {
        let variant = MenuItemVariant {
            id: "var_1".to_string(),
            name: None,
            price: Some(Decimal::new(650, 2)),
        };

        let form = VariantForm::from(&variant);

        assert_eq!(form.price.as_deref(), Some("6.50"));
        assert_eq!(form.id.as_deref(), Some("var_1"));
    }
}
