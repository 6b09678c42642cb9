use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::shop::{
    NewShop as DomainNewShop, Shop as DomainShop, ShopStatus, UpdateShop as DomainUpdateShop,
};
use crate::repository::errors::RepositoryError;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::shops)]
pub struct Shop {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub name: String,
    pub status: String,
    /// JSON array of menu identifiers.
    pub menu_ids: String,
    pub cover_image: Option<String>,
    pub logo: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::shops)]
pub struct NewShop<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub username: &'a str,
    pub name: &'a str,
    pub status: &'a str,
    pub menu_ids: &'a str,
    pub cover_image: Option<&'a str>,
    pub logo: Option<&'a str>,
    pub phone_number: Option<&'a str>,
    pub address: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::shops)]
pub struct UpdateShop<'a> {
    pub name: Option<&'a str>,
    pub status: Option<&'a str>,
    pub menu_ids: Option<String>,
    pub cover_image: Option<Option<&'a str>>,
    pub logo: Option<Option<&'a str>>,
    pub phone_number: Option<Option<&'a str>>,
    pub address: Option<Option<&'a str>>,
    pub updated_at: NaiveDateTime,
}

impl<'a> NewShop<'a> {
    /// Insertable row for `value` under the gateway assigned `id` and `username`.
    pub fn new(id: &'a str, username: &'a str, value: &'a DomainNewShop) -> Self {
        Self {
            id,
            user_id: value.user_id.as_str(),
            username,
            name: value.name.as_str(),
            status: value.status.as_str(),
            menu_ids: "[]",
            cover_image: value.cover_image.as_deref(),
            logo: value.logo.as_deref(),
            phone_number: value.phone_number.as_deref(),
            address: value.address.as_deref(),
            created_at: value.updated_at,
            updated_at: value.updated_at,
        }
    }
}

impl TryFrom<Shop> for DomainShop {
    type Error = RepositoryError;

    fn try_from(value: Shop) -> Result<Self, Self::Error> {
        let status = ShopStatus::parse(&value.status).ok_or_else(|| {
            RepositoryError::InvalidData(format!(
                "shop `{}` has unknown status `{}`",
                value.id, value.status
            ))
        })?;
        let menu_ids = serde_json::from_str(&value.menu_ids)?;

        Ok(Self {
            id: value.id,
            user_id: value.user_id,
            username: value.username,
            name: value.name,
            status,
            menu_ids,
            cover_image: value.cover_image,
            logo: value.logo,
            phone_number: value.phone_number,
            address: value.address,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

impl<'a> TryFrom<&'a DomainUpdateShop> for UpdateShop<'a> {
    type Error = RepositoryError;

    fn try_from(value: &'a DomainUpdateShop) -> Result<Self, Self::Error> {
        let menu_ids = value
            .menu_ids
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        Ok(Self {
            name: value.name.as_deref(),
            status: value.status.map(ShopStatus::as_str),
            menu_ids,
            cover_image: value.cover_image.as_ref().map(Option::as_deref),
            logo: value.logo.as_ref().map(Option::as_deref),
            phone_number: value.phone_number.as_ref().map(Option::as_deref),
            address: value.address.as_ref().map(Option::as_deref),
            updated_at: value
                .updated_at
                .unwrap_or_else(|| chrono::Local::now().naive_utc()),
        })
    }
}
