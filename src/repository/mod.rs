use crate::db::{DbConnection, DbPool};
use crate::domain::menu::{Menu, MenuStatus, NewMenu};
use crate::domain::shop::{NewShop, Shop, ShopPreview, ShopStatus, UpdateShop};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod menu;
pub mod shop;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over shop records.
pub trait ShopReader {
    /// Shops owned by `user_id` whose status is one of `statuses`, oldest first.
    fn list_shops(
        &self,
        user_id: &str,
        statuses: &[ShopStatus],
    ) -> RepositoryResult<Vec<ShopPreview>>;
    fn get_shop_by_id(&self, shop_id: &str) -> RepositoryResult<Option<Shop>>;
    fn get_shop_by_username(&self, username: &str) -> RepositoryResult<Option<Shop>>;
}

/// Write operations over shop records.
pub trait ShopWriter {
    /// Inserts the shop; the gateway assigns its `id` and `username`.
    fn create_shop(&self, new_shop: &NewShop) -> RepositoryResult<Shop>;
    fn update_shop(&self, shop_id: &str, updates: &UpdateShop) -> RepositoryResult<Shop>;
}

/// Read-only operations over menu documents.
pub trait MenuReader {
    /// Menus of the shop that are not removed, oldest first.
    fn list_menus(&self, shop_id: &str) -> RepositoryResult<Vec<Menu>>;
    fn get_menu_by_id(&self, menu_id: &str) -> RepositoryResult<Option<Menu>>;
    fn get_menu_by_slug(&self, shop_id: &str, slug: &str) -> RepositoryResult<Option<Menu>>;
}

/// Write operations over menu documents.
pub trait MenuWriter {
    /// Inserts the menu; the gateway assigns its `id` and `slug`.
    fn create_menu(&self, new_menu: &NewMenu) -> RepositoryResult<Menu>;
    /// Replaces the stored document of `menu_id` with `menu`.
    fn update_menu(&self, menu_id: &str, menu: &Menu) -> RepositoryResult<()>;
    /// Sets the status of every menu of the shop.
    fn update_menu_status(&self, shop_id: &str, status: MenuStatus) -> RepositoryResult<()>;
    fn delete_menu(&self, menu_id: &str) -> RepositoryResult<()>;
}

/// Pick `base`, or `base-2`, `base-3`, ... when `taken` reports a clash.
pub(crate) fn unique_slug(
    base: &str,
    mut taken: impl FnMut(&str) -> RepositoryResult<bool>,
) -> RepositoryResult<String> {
    if !taken(base)? {
        return Ok(base.to_string());
    }

    let mut suffix = 2;
    loop {
        let candidate = format!("{base}-{suffix}");
        if !taken(&candidate)? {
            return Ok(candidate);
        }
        suffix += 1;
    }
}
