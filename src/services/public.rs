use serde::Serialize;

use crate::domain::menu::{Menu, MenuCollection, MenuItem, MenuItemVariant, MenuStatus};
use crate::domain::shop::{Shop, ShopStatus};
use crate::repository::{MenuReader, ShopReader};
use crate::services::{ServiceError, ServiceResult};

/// Public profile of a shop.
#[derive(Debug, Serialize, PartialEq)]
pub struct ShopView {
    pub name: String,
    pub username: String,
    pub cover_image: Option<String>,
    pub logo: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

impl From<Shop> for ShopView {
    fn from(shop: Shop) -> Self {
        Self {
            name: shop.name,
            username: shop.username,
            cover_image: shop.cover_image,
            logo: shop.logo,
            phone_number: shop.phone_number,
            address: shop.address,
        }
    }
}

/// Entry of the shop landing page linking to one menu.
#[derive(Debug, Serialize, PartialEq)]
pub struct MenuLink {
    pub name: String,
    pub slug: String,
    pub dish_count: usize,
}

/// Data served on the shop landing page.
#[derive(Debug, Serialize)]
pub struct ShopPageData {
    pub shop: ShopView,
    pub menus: Vec<MenuLink>,
}

/// A dish as shown to diners, with its starting price.
#[derive(Debug, Serialize, PartialEq)]
pub struct MenuItemView {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub variants: Vec<MenuItemVariant>,
    /// Lowest variant price with two decimals.
    pub base_price: String,
}

impl From<MenuItem> for MenuItemView {
    fn from(item: MenuItem) -> Self {
        let base_price = item.base_price();
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            image_url: item.image_url,
            variants: item.variants,
            base_price,
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CollectionView {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub items: Vec<MenuItemView>,
}

impl From<MenuCollection> for CollectionView {
    fn from(collection: MenuCollection) -> Self {
        Self {
            id: collection.id,
            name: collection.name,
            description: collection.description,
            items: collection.items.into_iter().map(MenuItemView::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct MenuView {
    pub name: String,
    pub slug: String,
    pub collections: Vec<CollectionView>,
}

impl From<Menu> for MenuView {
    fn from(menu: Menu) -> Self {
        Self {
            name: menu.name,
            slug: menu.slug,
            collections: menu
                .collections
                .into_iter()
                .map(CollectionView::from)
                .collect(),
        }
    }
}

/// Data served on a menu page.
#[derive(Debug, Serialize)]
pub struct MenuPageData {
    pub shop: ShopView,
    pub menu: MenuView,
}

/// Loads a shop and the menus it publishes.
pub fn load_shop_page<R>(repo: &R, username: &str) -> ServiceResult<ShopPageData>
where
    R: ShopReader + MenuReader + ?Sized,
{
    let shop = find_visible_shop(repo, username)?;

    let menus = repo
        .list_menus(&shop.id)
        .map_err(ServiceError::from)?
        .into_iter()
        .filter(|menu| menu.status == MenuStatus::Active)
        .map(|menu| MenuLink {
            dish_count: menu.dish_count(),
            name: menu.name,
            slug: menu.slug,
        })
        .collect();

    Ok(ShopPageData {
        shop: shop.into(),
        menus,
    })
}

/// Loads one published menu of a shop.
pub fn load_menu_page<R>(repo: &R, username: &str, slug: &str) -> ServiceResult<MenuPageData>
where
    R: ShopReader + MenuReader + ?Sized,
{
    let shop = find_visible_shop(repo, username)?;

    let menu = repo
        .get_menu_by_slug(&shop.id, slug)
        .map_err(ServiceError::from)?
        .filter(|menu| menu.status == MenuStatus::Active)
        .ok_or_else(|| ServiceError::NotFound(format!("menu `{slug}`")))?;

    Ok(MenuPageData {
        shop: shop.into(),
        menu: menu.into(),
    })
}

fn find_visible_shop<R>(repo: &R, username: &str) -> ServiceResult<Shop>
where
    R: ShopReader + ?Sized,
{
    repo.get_shop_by_username(username)
        .map_err(ServiceError::from)?
        .filter(|shop| ShopStatus::VISIBLE.contains(&shop.status))
        .ok_or_else(|| ServiceError::NotFound(format!("shop `{username}`")))
}
