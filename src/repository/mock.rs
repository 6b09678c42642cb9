use mockall::mock;

use super::{MenuReader, MenuWriter, ShopReader, ShopWriter};
use crate::domain::{
    menu::{Menu, MenuStatus, NewMenu},
    shop::{NewShop, Shop, ShopPreview, ShopStatus, UpdateShop},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub ShopReader {}

    impl ShopReader for ShopReader {
        fn list_shops(&self, user_id: &str, statuses: &[ShopStatus]) -> RepositoryResult<Vec<ShopPreview>>;
        fn get_shop_by_id(&self, shop_id: &str) -> RepositoryResult<Option<Shop>>;
        fn get_shop_by_username(&self, username: &str) -> RepositoryResult<Option<Shop>>;
    }
}

mock! {
    pub MenuReader {}

    impl MenuReader for MenuReader {
        fn list_menus(&self, shop_id: &str) -> RepositoryResult<Vec<Menu>>;
        fn get_menu_by_id(&self, menu_id: &str) -> RepositoryResult<Option<Menu>>;
        fn get_menu_by_slug(&self, shop_id: &str, slug: &str) -> RepositoryResult<Option<Menu>>;
    }
}

mock! {
    pub Gateway {}

    impl ShopReader for Gateway {
        fn list_shops(&self, user_id: &str, statuses: &[ShopStatus]) -> RepositoryResult<Vec<ShopPreview>>;
        fn get_shop_by_id(&self, shop_id: &str) -> RepositoryResult<Option<Shop>>;
        fn get_shop_by_username(&self, username: &str) -> RepositoryResult<Option<Shop>>;
    }

    impl ShopWriter for Gateway {
        fn create_shop(&self, new_shop: &NewShop) -> RepositoryResult<Shop>;
        fn update_shop(&self, shop_id: &str, updates: &UpdateShop) -> RepositoryResult<Shop>;
    }

    impl MenuReader for Gateway {
        fn list_menus(&self, shop_id: &str) -> RepositoryResult<Vec<Menu>>;
        fn get_menu_by_id(&self, menu_id: &str) -> RepositoryResult<Option<Menu>>;
        fn get_menu_by_slug(&self, shop_id: &str, slug: &str) -> RepositoryResult<Option<Menu>>;
    }

    impl MenuWriter for Gateway {
        fn create_menu(&self, new_menu: &NewMenu) -> RepositoryResult<Menu>;
        fn update_menu(&self, menu_id: &str, menu: &Menu) -> RepositoryResult<()>;
        fn update_menu_status(&self, shop_id: &str, status: MenuStatus) -> RepositoryResult<()>;
        fn delete_menu(&self, menu_id: &str) -> RepositoryResult<()>;
    }
}
