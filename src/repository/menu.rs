use chrono::Local;
use diesel::dsl::{exists, select};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::ids::{IdKind, new_id, slugify};
use crate::domain::menu::{Menu as DomainMenu, MenuStatus, NewMenu as DomainNewMenu};
use crate::models::menu::{Menu as DbMenu, NewMenu as DbNewMenu, UpdateMenu as DbUpdateMenu};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, MenuReader, MenuWriter, unique_slug};

impl MenuReader for DieselRepository {
    fn list_menus(&self, shop_id: &str) -> RepositoryResult<Vec<DomainMenu>> {
        use crate::schema::menus;

        let mut conn = self.conn()?;

        let menus = menus::table
            .filter(menus::shop_id.eq(shop_id))
            .filter(menus::status.ne(MenuStatus::Removed.as_str()))
            .order((menus::created_at.asc(), menus::id.asc()))
            .load::<DbMenu>(&mut conn)?;

        menus.into_iter().map(DomainMenu::try_from).collect()
    }

    fn get_menu_by_id(&self, menu_id: &str) -> RepositoryResult<Option<DomainMenu>> {
        use crate::schema::menus;

        let mut conn = self.conn()?;

        let menu = menus::table
            .filter(menus::id.eq(menu_id))
            .first::<DbMenu>(&mut conn)
            .optional()?;

        menu.map(DomainMenu::try_from).transpose()
    }

    fn get_menu_by_slug(&self, shop_id: &str, slug: &str) -> RepositoryResult<Option<DomainMenu>> {
        use crate::schema::menus;

        let mut conn = self.conn()?;

        let menu = menus::table
            .filter(menus::shop_id.eq(shop_id))
            .filter(menus::slug.eq(slug))
            .first::<DbMenu>(&mut conn)
            .optional()?;

        menu.map(DomainMenu::try_from).transpose()
    }
}

impl MenuWriter for DieselRepository {
    fn create_menu(&self, new_menu: &DomainNewMenu) -> RepositoryResult<DomainMenu> {
        use crate::schema::menus;

        let mut conn = self.conn()?;

        conn.transaction::<DomainMenu, RepositoryError, _>(|conn| {
            let id = new_id(IdKind::Menu);
            let base = slugify(&new_menu.name, "menu");
            let slug = unique_slug(&base, |candidate| {
                slug_taken(conn, &new_menu.shop_id, candidate)
            })?;

            let insertable = DbNewMenu::new(&id, &slug, new_menu)?;

            let created = diesel::insert_into(menus::table)
                .values(&insertable)
                .get_result::<DbMenu>(conn)?;

            created.try_into()
        })
    }

    fn update_menu(&self, menu_id: &str, menu: &DomainMenu) -> RepositoryResult<()> {
        use crate::schema::menus;

        let mut conn = self.conn()?;

        let db_updates = DbUpdateMenu::try_from(menu)?;

        let updated = diesel::update(menus::table.filter(menus::id.eq(menu_id)))
            .set(&db_updates)
            .execute(&mut conn)?;

        if updated == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn update_menu_status(&self, shop_id: &str, status: MenuStatus) -> RepositoryResult<()> {
        use crate::schema::menus;

        let mut conn = self.conn()?;

        diesel::update(menus::table.filter(menus::shop_id.eq(shop_id)))
            .set((
                menus::status.eq(status.as_str()),
                menus::updated_at.eq(Local::now().naive_utc()),
            ))
            .execute(&mut conn)?;

        Ok(())
    }

    fn delete_menu(&self, menu_id: &str) -> RepositoryResult<()> {
        use crate::schema::menus;

        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(menus::table.filter(menus::id.eq(menu_id))).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

fn slug_taken(conn: &mut SqliteConnection, shop_id: &str, slug: &str) -> RepositoryResult<bool> {
    use crate::schema::menus;

    let taken = select(exists(
        menus::table
            .filter(menus::shop_id.eq(shop_id))
            .filter(menus::slug.eq(slug)),
    ))
    .get_result(conn)?;

    Ok(taken)
}
