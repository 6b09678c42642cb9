use pushkind_menus::domain::menu::{MenuStatus, NewMenu};
use pushkind_menus::domain::shop::{NewShop, ShopStatus, UpdateShop};
use pushkind_menus::editor::add_collection;
use pushkind_menus::repository::errors::RepositoryError;
use pushkind_menus::repository::{DieselRepository, MenuReader, MenuWriter, ShopReader, ShopWriter};

mod common;

#[test]
fn test_shop_repository_crud() {
    let test_db = common::TestDb::new("test_shop_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let cafe = repo
        .create_shop(&NewShop::new("user-1", "Corner Cafe").with_phone_number("+1 555 0100"))
        .unwrap();
    assert!(cafe.id.starts_with("shop_"));
    assert_eq!(cafe.username, "corner-cafe");
    assert_eq!(cafe.status, ShopStatus::Active);
    assert!(cafe.menu_ids.is_empty());
    assert_eq!(cafe.phone_number.as_deref(), Some("+1 555 0100"));

    let twin = repo
        .create_shop(&NewShop::new("user-2", "Corner  Cafe!"))
        .unwrap();
    assert_eq!(twin.username, "corner-cafe-2");

    let grill = repo.create_shop(&NewShop::new("user-1", "Grill")).unwrap();

    let shops = repo.list_shops("user-1", &ShopStatus::VISIBLE).unwrap();
    let ids: Vec<&str> = shops.iter().map(|shop| shop.id.as_str()).collect();
    assert_eq!(ids, vec![cafe.id.as_str(), grill.id.as_str()]);

    let patch = UpdateShop {
        name: Some("Harbour Cafe".to_string()),
        phone_number: Some(None),
        address: Some(Some("1 Pier Road".to_string())),
        ..UpdateShop::new()
    };
    let updated = repo.update_shop(&cafe.id, &patch).unwrap();
    assert_eq!(updated.name, "Harbour Cafe");
    assert!(updated.phone_number.is_none());
    assert_eq!(updated.address.as_deref(), Some("1 Pier Road"));
    assert_eq!(updated.username, "corner-cafe");

    repo.update_shop(&grill.id, &UpdateShop::status(ShopStatus::Shutdown))
        .unwrap();
    let shops = repo.list_shops("user-1", &ShopStatus::VISIBLE).unwrap();
    assert_eq!(shops.len(), 1);
    assert_eq!(shops[0].name, "Harbour Cafe");

    let by_username = repo.get_shop_by_username("corner-cafe-2").unwrap().unwrap();
    assert_eq!(by_username.id, twin.id);
    assert!(repo.get_shop_by_id("shop_missing").unwrap().is_none());

    let err = repo
        .update_shop("shop_missing", &UpdateShop::status(ShopStatus::Paused))
        .expect_err("expected update of unknown shop to fail");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_menu_repository_crud() {
    let test_db = common::TestDb::new("test_menu_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());
    let shop = repo.create_shop(&NewShop::new("user-1", "Corner Cafe")).unwrap();
    let other = repo.create_shop(&NewShop::new("user-2", "Grill")).unwrap();

    let lunch = repo
        .create_menu(&NewMenu::blank().for_shop(shop.id.clone()))
        .unwrap();
    assert!(lunch.id.starts_with("menu_"));
    assert_eq!(lunch.slug, "untitled-menu");
    assert_eq!(lunch.status, MenuStatus::Active);
    assert_eq!(lunch.collections.len(), 1);
    assert_eq!(lunch.items.len(), 1);

    let second = repo
        .create_menu(&NewMenu::blank().for_shop(shop.id.clone()))
        .unwrap();
    assert_eq!(second.slug, "untitled-menu-2");

    let elsewhere = repo
        .create_menu(&NewMenu::blank().for_shop(other.id.clone()))
        .unwrap();
    assert_eq!(elsewhere.slug, "untitled-menu");

    let sample = repo
        .create_menu(&NewMenu::sample().for_shop(shop.id.clone()))
        .unwrap();
    let stored = repo.get_menu_by_id(&sample.id).unwrap().unwrap();
    assert_eq!(stored.collections, sample.collections);
    assert_eq!(stored.items, sample.items);

    let edited = add_collection(&lunch).unwrap();
    repo.update_menu(&lunch.id, &edited).unwrap();
    let reloaded = repo
        .get_menu_by_slug(&shop.id, "untitled-menu")
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.id, lunch.id);
    assert_eq!(reloaded.collections, edited.collections);
    assert_eq!(reloaded.items, edited.items);

    let menus = repo.list_menus(&shop.id).unwrap();
    let ids: Vec<&str> = menus.iter().map(|menu| menu.id.as_str()).collect();
    assert_eq!(ids, vec![lunch.id.as_str(), second.id.as_str(), sample.id.as_str()]);

    repo.delete_menu(&second.id).unwrap();
    assert!(repo.get_menu_by_id(&second.id).unwrap().is_none());
    let err = repo
        .delete_menu(&second.id)
        .expect_err("expected second delete to fail");
    assert!(matches!(err, RepositoryError::NotFound));

    let err = repo
        .update_menu("menu_missing", &edited)
        .expect_err("expected update of unknown menu to fail");
    assert!(matches!(err, RepositoryError::NotFound));

    repo.update_menu_status(&shop.id, MenuStatus::Removed).unwrap();
    assert!(repo.list_menus(&shop.id).unwrap().is_empty());
    let removed = repo.get_menu_by_id(&lunch.id).unwrap().unwrap();
    assert_eq!(removed.status, MenuStatus::Removed);
    assert_eq!(repo.list_menus(&other.id).unwrap().len(), 1);
}

#[test]
fn test_menu_requires_existing_shop() {
    let test_db = common::TestDb::new("test_menu_requires_existing_shop.db");
    let repo = DieselRepository::new(test_db.pool());

    let err = repo
        .create_menu(&NewMenu::blank().for_shop("shop_missing"))
        .expect_err("expected insert for unknown shop to fail");
    assert!(matches!(err, RepositoryError::Database(_)));
}
