use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Default display name given to shops created without one.
pub const DEFAULT_SHOP_NAME: &str = "Untitled shop";

/// Lifecycle states of a shop.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShopStatus {
    /// Shop is live and visible to diners.
    #[default]
    Active,
    /// Shop is temporarily hidden by its owner.
    Paused,
    /// Shop was shut down; it is never listed again.
    Shutdown,
}

impl ShopStatus {
    /// Statuses of shops an owner can still work with.
    pub const VISIBLE: [ShopStatus; 2] = [ShopStatus::Active, ShopStatus::Paused];

    pub fn as_str(self) -> &'static str {
        match self {
            ShopStatus::Active => "active",
            ShopStatus::Paused => "paused",
            ShopStatus::Shutdown => "shutdown",
        }
    }

    /// Parse the stored representation of a status.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(ShopStatus::Active),
            "paused" => Some(ShopStatus::Paused),
            "shutdown" => Some(ShopStatus::Shutdown),
            _ => None,
        }
    }
}

/// Domain representation of a shop (a restaurant account owning menus).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Shop {
    /// Unique identifier of the shop.
    pub id: String,
    /// Identifier of the owning user.
    pub user_id: String,
    /// Unique URL slug used by the public pages.
    pub username: String,
    /// Display name of the establishment.
    pub name: String,
    /// Current lifecycle status.
    pub status: ShopStatus,
    /// Ordered identifiers of the menus owned by the shop.
    pub menu_ids: Vec<String>,
    /// Public URL of the cover image.
    pub cover_image: Option<String>,
    /// Public URL of the logo.
    pub logo: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    /// Timestamp for when the shop record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the shop record.
    pub updated_at: NaiveDateTime,
}

impl Shop {
    /// Short representation used by shop pickers.
    pub fn preview(&self) -> ShopPreview {
        ShopPreview {
            id: self.id.clone(),
            name: self.name.clone(),
            username: self.username.clone(),
        }
    }
}

/// Lightweight listing entry for a shop.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ShopPreview {
    pub id: String,
    pub name: String,
    pub username: String,
}

/// Payload required to insert a new shop. The gateway assigns `id` and `username`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShop {
    /// Identifier of the owning user.
    pub user_id: String,
    /// Display name of the establishment.
    pub name: String,
    /// Initial lifecycle status.
    pub status: ShopStatus,
    pub cover_image: Option<String>,
    pub logo: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewShop {
    /// Build an active shop payload owned by `user_id`.
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            status: ShopStatus::Active,
            cover_image: None,
            logo: None,
            phone_number: None,
            address: None,
            updated_at: Local::now().naive_utc(),
        }
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_cover_image(mut self, cover_image: impl Into<String>) -> Self {
        self.cover_image = Some(cover_image.into());
        self
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }
}

/// Patch data applied when updating a shop. `None` leaves a field untouched;
/// `Some(None)` clears a nullable field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateShop {
    pub name: Option<String>,
    pub status: Option<ShopStatus>,
    pub menu_ids: Option<Vec<String>>,
    pub cover_image: Option<Option<String>>,
    pub logo: Option<Option<String>>,
    pub phone_number: Option<Option<String>>,
    pub address: Option<Option<String>>,
    /// Timestamp captured when the patch was created.
    pub updated_at: Option<NaiveDateTime>,
}

impl UpdateShop {
    /// Empty patch stamped with the current time.
    pub fn new() -> Self {
        Self {
            updated_at: Some(Local::now().naive_utc()),
            ..Self::default()
        }
    }

    /// Patch that only changes the lifecycle status.
    pub fn status(status: ShopStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::new()
        }
    }

    /// Patch that only rewrites the denormalised menu id list.
    pub fn menu_ids(menu_ids: Vec<String>) -> Self {
        Self {
            menu_ids: Some(menu_ids),
            ..Self::new()
        }
    }
}
