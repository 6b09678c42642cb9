use chrono::{Local, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::menu::{Menu as DomainMenu, MenuStatus, NewMenu as DomainNewMenu};
use crate::repository::errors::RepositoryError;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::menus)]
pub struct Menu {
    pub id: String,
    pub shop_id: String,
    pub slug: String,
    pub status: String,
    pub name: String,
    /// JSON array of collections.
    pub collections: String,
    /// JSON array with the flat dish list.
    pub items: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::menus)]
pub struct NewMenu<'a> {
    pub id: &'a str,
    pub shop_id: &'a str,
    pub slug: &'a str,
    pub status: &'a str,
    pub name: &'a str,
    pub collections: String,
    pub items: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Full document replacement; the slug stays put.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::menus)]
pub struct UpdateMenu<'a> {
    pub status: &'a str,
    pub name: &'a str,
    pub collections: String,
    pub items: String,
    pub updated_at: NaiveDateTime,
}

impl<'a> NewMenu<'a> {
    /// Insertable row for `value` under the gateway assigned `id` and `slug`.
    pub fn new(
        id: &'a str,
        slug: &'a str,
        value: &'a DomainNewMenu,
    ) -> Result<Self, RepositoryError> {
        Ok(Self {
            id,
            shop_id: value.shop_id.as_str(),
            slug,
            status: value.status.as_str(),
            name: value.name.as_str(),
            collections: serde_json::to_string(&value.collections)?,
            items: serde_json::to_string(&value.items)?,
            created_at: value.updated_at,
            updated_at: value.updated_at,
        })
    }
}

impl<'a> TryFrom<&'a DomainMenu> for UpdateMenu<'a> {
    type Error = RepositoryError;

    fn try_from(value: &'a DomainMenu) -> Result<Self, Self::Error> {
        Ok(Self {
            status: value.status.as_str(),
            name: value.name.as_str(),
            collections: serde_json::to_string(&value.collections)?,
            items: serde_json::to_string(&value.items)?,
            updated_at: Local::now().naive_utc(),
        })
    }
}

impl TryFrom<Menu> for DomainMenu {
    type Error = RepositoryError;

    fn try_from(value: Menu) -> Result<Self, Self::Error> {
        let status = MenuStatus::parse(&value.status).ok_or_else(|| {
            RepositoryError::InvalidData(format!(
                "menu `{}` has unknown status `{}`",
                value.id, value.status
            ))
        })?;

        Ok(Self {
            collections: serde_json::from_str(&value.collections)?,
            items: serde_json::from_str(&value.items)?,
            id: value.id,
            shop_id: value.shop_id,
            slug: value.slug,
            status,
            name: value.name,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}
