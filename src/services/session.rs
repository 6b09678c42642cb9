//! The owner's working session: the active shop, its menus and every write.
//!
//! Structural menu edits run through [`crate::editor`] on the caller's
//! snapshot; only a successful gateway write changes what the session holds.

use log::{debug, info, warn};

use crate::domain::menu::{Menu, MenuStatus, NewMenu};
use crate::domain::session::LastMenu;
use crate::domain::shop::{Shop, ShopPreview, ShopStatus, UpdateShop};
use crate::editor::{self, EditorResult};
use crate::forms::collections::CollectionForm;
use crate::forms::items::MenuItemForm;
use crate::forms::menus::MenuForm;
use crate::forms::shops::ShopForm;
use crate::repository::{MenuReader, MenuWriter, ShopReader, ShopWriter};
use crate::services::{ServiceError, ServiceResult};
use crate::storage::{KeyValueStore, read_app_data, update_app_data};

/// Active shop and menus of one signed-in owner.
pub struct ShopSession<R, S> {
    repo: R,
    store: S,
    user_id: String,
    loaded: bool,
    shops: Vec<ShopPreview>,
    shop: Option<Shop>,
    menus: Vec<Menu>,
    current_shop_id: Option<String>,
}

impl<R, S> ShopSession<R, S>
where
    R: ShopReader + ShopWriter + MenuReader + MenuWriter,
    S: KeyValueStore,
{
    pub fn new(repo: R, store: S, user_id: impl Into<String>) -> Self {
        Self {
            repo,
            store,
            user_id: user_id.into(),
            loaded: false,
            shops: Vec::new(),
            shop: None,
            menus: Vec::new(),
            current_shop_id: None,
        }
    }

    /// Whether [`ShopSession::load`] has completed at least once.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn shops(&self) -> &[ShopPreview] {
        &self.shops
    }

    pub fn shop(&self) -> Option<&Shop> {
        self.shop.as_ref()
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    pub fn current_shop_id(&self) -> Option<&str> {
        self.current_shop_id.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetches the owner's shops and settles on the active one.
    ///
    /// A selection that still exists is kept. Otherwise the shop remembered
    /// in the local store is restored, falling back to the first shop.
    pub fn load(&mut self) -> ServiceResult<()> {
        let shops = self.fetch_shops()?;

        let Some(first) = shops.first() else {
            debug!("User {} has no shops", self.user_id);
            self.shops = shops;
            self.loaded = true;
            self.clear_selection();
            return Ok(());
        };

        let target = match self
            .current_shop_id
            .as_deref()
            .filter(|id| contains_shop(&shops, id))
        {
            Some(id) => id.to_string(),
            None => {
                let stored = read_app_data(&self.store)?;
                match stored.preferred_shop_id() {
                    Some(id) if contains_shop(&shops, id) => id.to_string(),
                    Some(id) => {
                        warn!(
                            "Stored shop {id} is no longer available; selecting {}",
                            first.id
                        );
                        first.id.clone()
                    }
                    None => first.id.clone(),
                }
            }
        };

        let (shop, menus) = self.fetch_shop(&target)?;
        if self.current_shop_id.as_deref() != Some(target.as_str()) {
            self.persist_selection(&target)?;
        }

        self.shops = shops;
        self.loaded = true;
        self.set_active(shop, menus);
        Ok(())
    }

    /// Makes `shop_id`, one of the fetched shops, the active shop.
    pub fn select_shop(&mut self, shop_id: &str) -> ServiceResult<()> {
        if !contains_shop(&self.shops, shop_id) {
            return Err(ServiceError::NotFound(format!("shop `{shop_id}`")));
        }

        let (shop, menus) = self.fetch_shop(shop_id)?;
        self.persist_selection(shop_id)?;
        debug!("Selected shop {shop_id}");
        self.set_active(shop, menus);
        Ok(())
    }

    pub fn create_shop(&mut self, form: ShopForm) -> ServiceResult<Shop> {
        let new_shop = form
            .into_new_shop(&self.user_id)
            .map_err(|err| ServiceError::Form(err.to_string()))?;

        let created = self.repo.create_shop(&new_shop)?;
        info!("Created shop {} ({})", created.id, created.username);

        self.shops = self.fetch_shops()?;
        self.select_shop(&created.id)?;
        Ok(created)
    }

    /// Saves the profile of the active shop.
    pub fn update_shop(&mut self, form: ShopForm) -> ServiceResult<Shop> {
        let shop_id = self.require_shop()?.id.clone();
        let patch = form
            .into_update_shop()
            .map_err(|err| ServiceError::Form(err.to_string()))?;

        self.write_shop(&shop_id, &patch)
    }

    /// Changes the status of the active shop. Shutting down goes through
    /// [`ShopSession::shutdown_shop`].
    pub fn set_shop_status(&mut self, status: ShopStatus) -> ServiceResult<Shop> {
        let shop_id = self.require_shop()?.id.clone();
        if status == ShopStatus::Shutdown {
            return self.shutdown_shop(&shop_id);
        }

        self.write_shop(&shop_id, &UpdateShop::status(status))
    }

    /// Removes the shop's menus, moves the selection away and marks the shop
    /// shut down. The steps are separate writes; a failure midway is not
    /// rolled back.
    pub fn shutdown_shop(&mut self, shop_id: &str) -> ServiceResult<Shop> {
        self.require_owned_shop(shop_id)?;

        let target = match self.shop.as_ref().filter(|shop| shop.id == shop_id) {
            Some(shop) => shop.clone(),
            None => self
                .repo
                .get_shop_by_id(shop_id)?
                .ok_or_else(|| ServiceError::NotFound(format!("shop `{shop_id}`")))?,
        };

        if !target.menu_ids.is_empty() {
            self.repo.update_menu_status(shop_id, MenuStatus::Removed)?;
            info!("Removed {} menus of shop {shop_id}", target.menu_ids.len());
        }

        let next = self
            .shops
            .iter()
            .find(|shop| shop.id != shop_id)
            .map(|shop| shop.id.clone());
        match next {
            Some(next) => self.select_shop(&next)?,
            None => self.clear_selection(),
        }

        let shut_down = self
            .repo
            .update_shop(shop_id, &UpdateShop::status(ShopStatus::Shutdown))?;
        info!("Shut down shop {shop_id}");

        self.shops = self.fetch_shops()?;
        Ok(shut_down)
    }

    /// Re-fetches the menus of the active shop.
    pub fn refresh_menus(&mut self) -> ServiceResult<()> {
        let shop_id = self.require_shop()?.id.clone();
        self.menus = self.repo.list_menus(&shop_id)?;
        Ok(())
    }

    /// Inserts a menu for the active shop and records it in the shop's menu list.
    pub fn create_menu(&mut self, new_menu: NewMenu) -> ServiceResult<Menu> {
        let shop = self.require_shop()?.clone();
        let new_menu = new_menu.for_shop(shop.id.clone());

        let created = self.repo.create_menu(&new_menu)?;
        info!("Created menu {} ({}) for shop {}", created.id, created.slug, shop.id);

        let mut menu_ids = shop.menu_ids;
        menu_ids.push(created.id.clone());
        let updated = self
            .repo
            .update_shop(&shop.id, &UpdateShop::menu_ids(menu_ids))?;
        self.shop = Some(updated);

        self.refresh_menus()?;
        Ok(created)
    }

    pub fn create_blank_menu(&mut self) -> ServiceResult<Menu> {
        self.create_menu(NewMenu::blank())
    }

    /// Creates a menu prefilled with demo dishes.
    pub fn create_sample_menu(&mut self) -> ServiceResult<Menu> {
        self.create_menu(NewMenu::sample())
    }

    /// Overwrites the stored document with `menu`, which must belong to one
    /// of the owner's shops.
    pub fn update_menu(&mut self, menu: &Menu) -> ServiceResult<()> {
        self.require_owned_shop(&menu.shop_id)?;
        self.repo.update_menu(&menu.id, menu)?;
        info!("Saved menu {}", menu.id);
        self.refresh_menus_of(&menu.shop_id)
    }

    pub fn rename_menu(&mut self, menu: &Menu, form: MenuForm) -> ServiceResult<Menu> {
        let name = form
            .into_menu_name()
            .map_err(|err| ServiceError::Form(err.to_string()))?;

        let renamed = Menu {
            name,
            ..menu.clone()
        };
        if renamed == *menu {
            debug!("Menu {} already has that name", menu.id);
            return Ok(renamed);
        }

        self.update_menu(&renamed)?;
        Ok(renamed)
    }

    /// Deletes a menu of the active shop and drops it from the shop's menu list.
    pub fn delete_menu(&mut self, menu_id: &str) -> ServiceResult<()> {
        let shop = self.require_shop()?.clone();
        let listed = self.menus.iter().any(|menu| menu.id == menu_id)
            || shop.menu_ids.iter().any(|id| id == menu_id);
        if !listed {
            return Err(ServiceError::NotFound(format!("menu `{menu_id}`")));
        }

        self.repo.delete_menu(menu_id)?;
        info!("Deleted menu {menu_id} of shop {}", shop.id);

        let menu_ids = shop
            .menu_ids
            .into_iter()
            .filter(|id| id != menu_id)
            .collect();
        let updated = self
            .repo
            .update_shop(&shop.id, &UpdateShop::menu_ids(menu_ids))?;
        self.shop = Some(updated);

        self.refresh_menus()
    }

    /// Loads a menu for editing.
    ///
    /// The menu is remembered in the local store, its shop becomes active and
    /// a menu without collections receives a default one.
    pub fn open_menu(&mut self, menu_id: &str) -> ServiceResult<Menu> {
        let menu = self
            .repo
            .get_menu_by_id(menu_id)?
            .ok_or_else(|| ServiceError::NotFound(format!("menu `{menu_id}`")))?;
        self.require_owned_shop(&menu.shop_id)?;

        update_app_data(&self.store, |data| {
            data.menu = Some(LastMenu {
                id: menu.id.clone(),
                shop_id: menu.shop_id.clone(),
            });
        })?;

        if self.current_shop_id.as_deref() != Some(menu.shop_id.as_str()) {
            self.select_shop(&menu.shop_id)?;
        }

        self.write_through(&menu, editor::ensure_collection)
    }

    pub fn add_collection(&mut self, menu: &Menu) -> ServiceResult<Menu> {
        self.write_through(menu, editor::add_collection)
    }

    pub fn update_collection(&mut self, menu: &Menu, form: CollectionForm) -> ServiceResult<Menu> {
        let collection_id = form.collection_id.clone();
        let details = form
            .into_details()
            .map_err(|err| ServiceError::Form(err.to_string()))?;

        self.write_through(menu, |menu| {
            editor::update_collection(menu, &collection_id, details.name, details.description)
        })
    }

    pub fn remove_collection(&mut self, menu: &Menu, collection_id: &str) -> ServiceResult<Menu> {
        self.write_through(menu, |menu| editor::remove_collection(menu, collection_id))
    }

    pub fn move_up_collection(&mut self, menu: &Menu, collection_id: &str) -> ServiceResult<Menu> {
        self.write_through(menu, |menu| editor::move_up_collection(menu, collection_id))
    }

    pub fn move_down_collection(
        &mut self,
        menu: &Menu,
        collection_id: &str,
    ) -> ServiceResult<Menu> {
        self.write_through(menu, |menu| {
            editor::move_down_collection(menu, collection_id)
        })
    }

    pub fn add_menu_item(&mut self, menu: &Menu, form: MenuItemForm) -> ServiceResult<Menu> {
        let item = form
            .into_new_menu_item()
            .map_err(|err| ServiceError::Form(err.to_string()))?;

        self.write_through(menu, |menu| editor::add_menu_item(menu, item))
    }

    pub fn update_menu_item(
        &mut self,
        menu: &Menu,
        item_id: &str,
        form: MenuItemForm,
    ) -> ServiceResult<Menu> {
        let item = form
            .into_menu_item(item_id)
            .map_err(|err| ServiceError::Form(err.to_string()))?;

        self.write_through(menu, |menu| editor::update_menu_item(menu, item))
    }

    pub fn remove_menu_item(&mut self, menu: &Menu, item_id: &str) -> ServiceResult<Menu> {
        self.write_through(menu, |menu| editor::remove_menu_item(menu, item_id))
    }

    pub fn duplicate_menu_item(&mut self, menu: &Menu, item_id: &str) -> ServiceResult<Menu> {
        self.write_through(menu, |menu| editor::duplicate_menu_item(menu, item_id))
    }

    pub fn move_up_menu_item(&mut self, menu: &Menu, item_id: &str) -> ServiceResult<Menu> {
        self.write_through(menu, |menu| editor::move_up_menu_item(menu, item_id))
    }

    pub fn move_down_menu_item(&mut self, menu: &Menu, item_id: &str) -> ServiceResult<Menu> {
        self.write_through(menu, |menu| editor::move_down_menu_item(menu, item_id))
    }

    /// Applies `edit` to the snapshot and stores the whole result.
    /// An unchanged document is returned without a write.
    fn write_through<F>(&mut self, menu: &Menu, edit: F) -> ServiceResult<Menu>
    where
        F: FnOnce(&Menu) -> EditorResult<Menu>,
    {
        let edited = edit(menu)?;
        if edited == *menu {
            debug!("Menu {} unchanged, skipping write", menu.id);
            return Ok(edited);
        }

        self.update_menu(&edited)?;
        Ok(edited)
    }

    fn write_shop(&mut self, shop_id: &str, patch: &UpdateShop) -> ServiceResult<Shop> {
        let updated = self.repo.update_shop(shop_id, patch)?;
        info!("Updated shop {shop_id}");

        if self.current_shop_id.as_deref() == Some(shop_id) {
            self.shop = Some(updated.clone());
        }
        self.shops = self.fetch_shops()?;
        Ok(updated)
    }

    fn fetch_shops(&self) -> ServiceResult<Vec<ShopPreview>> {
        Ok(self.repo.list_shops(&self.user_id, &ShopStatus::VISIBLE)?)
    }

    fn fetch_shop(&self, shop_id: &str) -> ServiceResult<(Shop, Vec<Menu>)> {
        let shop = self
            .repo
            .get_shop_by_id(shop_id)?
            .ok_or_else(|| ServiceError::NotFound(format!("shop `{shop_id}`")))?;
        let menus = self.repo.list_menus(shop_id)?;
        Ok((shop, menus))
    }

    fn refresh_menus_of(&mut self, shop_id: &str) -> ServiceResult<()> {
        if self.current_shop_id.as_deref() == Some(shop_id) {
            self.menus = self.repo.list_menus(shop_id)?;
        }
        Ok(())
    }

    fn persist_selection(&self, shop_id: &str) -> ServiceResult<()> {
        update_app_data(&self.store, |data| data.shop_id = Some(shop_id.to_string()))?;
        Ok(())
    }

    fn require_owned_shop(&self, shop_id: &str) -> ServiceResult<()> {
        if contains_shop(&self.shops, shop_id) {
            Ok(())
        } else {
            Err(ServiceError::NotFound(format!("shop `{shop_id}`")))
        }
    }

    fn require_shop(&self) -> ServiceResult<&Shop> {
        self.shop.as_ref().ok_or(ServiceError::NoShopSelected)
    }

    fn set_active(&mut self, shop: Shop, menus: Vec<Menu>) {
        self.current_shop_id = Some(shop.id.clone());
        self.shop = Some(shop);
        self.menus = menus;
    }

    fn clear_selection(&mut self) {
        self.current_shop_id = None;
        self.shop = None;
        self.menus.clear();
    }
}

fn contains_shop(shops: &[ShopPreview], shop_id: &str) -> bool {
    shops.iter().any(|shop| shop.id == shop_id)
}
