use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::ids::{IdKind, new_id};

/// Default name of a freshly created menu.
pub const DEFAULT_MENU_NAME: &str = "Untitled menu";
/// Default name of a freshly created collection.
pub const DEFAULT_COLLECTION_NAME: &str = "Untitled collection";
/// Default name of a freshly created dish.
pub const DEFAULT_ITEM_NAME: &str = "Untitled dish";

/// Lifecycle states of a menu.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MenuStatus {
    /// Menu is published to diners.
    #[default]
    Active,
    /// Menu is hidden from diners but still editable.
    Paused,
    /// Menu was removed together with its shop.
    Removed,
}

impl MenuStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MenuStatus::Active => "active",
            MenuStatus::Paused => "paused",
            MenuStatus::Removed => "removed",
        }
    }

    /// Parse the stored representation of a status.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(MenuStatus::Active),
            "paused" => Some(MenuStatus::Paused),
            "removed" => Some(MenuStatus::Removed),
            _ => None,
        }
    }
}

/// A single price point of a dish.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MenuItemVariant {
    /// Unique identifier (`var_` prefix).
    pub id: String,
    /// Variant label such as "Large"; `None` marks the default single-price variant.
    pub name: Option<String>,
    /// Price with two-digit precision; `None` only while being edited.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
}

impl MenuItemVariant {
    /// Nameless variant without a price, used to seed new dishes.
    pub fn blank() -> Self {
        Self {
            id: new_id(IdKind::Variant),
            name: None,
            price: None,
        }
    }
}

/// A dish of a menu.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MenuItem {
    /// Unique identifier (`item_` prefix).
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Price variants; a dish always carries at least one.
    pub variants: Vec<MenuItemVariant>,
    /// Collection the dish is listed under. This is a back-reference, the
    /// collection does not own the dish.
    pub collection_id: Option<String>,
    pub image_url: Option<String>,
}

impl MenuItem {
    /// Default dish with a single blank variant, listed under `collection_id`.
    pub fn blank(collection_id: Option<String>) -> Self {
        Self {
            id: new_id(IdKind::Item),
            name: DEFAULT_ITEM_NAME.to_string(),
            description: None,
            variants: vec![MenuItemVariant::blank()],
            collection_id,
            image_url: None,
        }
    }

    /// Lowest variant price formatted with two decimals.
    ///
    /// A variant without a price counts as zero.
    pub fn base_price(&self) -> String {
        let lowest = self
            .variants
            .iter()
            .map(|variant| variant.price.unwrap_or(Decimal::ZERO))
            .min()
            .unwrap_or(Decimal::ZERO);
        format!("{:.2}", lowest.round_dp(2))
    }

    /// Whether the dish offers several named price points.
    pub fn has_variants(&self) -> bool {
        self.variants.len() > 1
    }
}

/// A named group of dishes within a menu.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MenuCollection {
    /// Unique identifier (`col_` prefix).
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Dishes of the collection in their within-collection order.
    pub items: Vec<MenuItem>,
}

/// A menu document: collections plus the flat list of every dish.
///
/// Every dish with a `collection_id` appears once in `items` and once in the
/// matching collection's `items`; the two orders are independent.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Menu {
    /// Unique identifier of the menu.
    pub id: String,
    /// Owning shop identifier.
    pub shop_id: String,
    /// URL segment, unique within the shop.
    pub slug: String,
    pub status: MenuStatus,
    pub name: String,
    pub collections: Vec<MenuCollection>,
    /// Every dish of the menu in display order.
    pub items: Vec<MenuItem>,
    /// Timestamp for when the menu record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the menu record.
    pub updated_at: NaiveDateTime,
}

impl Menu {
    /// Number of dishes listed across all collections.
    pub fn dish_count(&self) -> usize {
        self.collections
            .iter()
            .map(|collection| collection.items.len())
            .sum()
    }

    pub fn find_item(&self, item_id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn find_collection(&self, collection_id: &str) -> Option<&MenuCollection> {
        self.collections
            .iter()
            .find(|collection| collection.id == collection_id)
    }
}

/// Payload required to insert a new menu. The gateway assigns `id` and `slug`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMenu {
    /// Owning shop identifier; filled in by the session when empty.
    pub shop_id: String,
    pub name: String,
    pub status: MenuStatus,
    pub collections: Vec<MenuCollection>,
    pub items: Vec<MenuItem>,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewMenu {
    /// Active menu payload with the given content.
    pub fn new(
        name: impl Into<String>,
        collections: Vec<MenuCollection>,
        items: Vec<MenuItem>,
    ) -> Self {
        Self {
            shop_id: String::new(),
            name: name.into(),
            status: MenuStatus::Active,
            collections,
            items,
            updated_at: Local::now().naive_utc(),
        }
    }

    /// Menu with one default collection holding one default dish.
    pub fn blank() -> Self {
        let collection_id = new_id(IdKind::Collection);
        let item = MenuItem::blank(Some(collection_id.clone()));
        let collection = MenuCollection {
            id: collection_id,
            name: DEFAULT_COLLECTION_NAME.to_string(),
            description: Some(String::new()),
            items: vec![item.clone()],
        };

        Self::new(DEFAULT_MENU_NAME, vec![collection], vec![item])
    }

    /// Attach the owning shop identifier.
    pub fn for_shop(mut self, shop_id: impl Into<String>) -> Self {
        self.shop_id = shop_id.into();
        self
    }
}
