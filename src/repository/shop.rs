use diesel::dsl::{exists, select};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::ids::{IdKind, new_id, slugify};
use crate::domain::shop::{
    NewShop as DomainNewShop, Shop as DomainShop, ShopPreview, ShopStatus,
    UpdateShop as DomainUpdateShop,
};
use crate::models::shop::{NewShop as DbNewShop, Shop as DbShop, UpdateShop as DbUpdateShop};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ShopReader, ShopWriter, unique_slug};

impl ShopReader for DieselRepository {
    fn list_shops(
        &self,
        user_id: &str,
        statuses: &[ShopStatus],
    ) -> RepositoryResult<Vec<ShopPreview>> {
        use crate::schema::shops;

        let mut conn = self.conn()?;

        let statuses: Vec<&str> = statuses.iter().map(|status| status.as_str()).collect();

        let shops = shops::table
            .filter(shops::user_id.eq(user_id))
            .filter(shops::status.eq_any(statuses))
            .order((shops::created_at.asc(), shops::id.asc()))
            .select((shops::id, shops::name, shops::username))
            .load::<(String, String, String)>(&mut conn)?;

        Ok(shops
            .into_iter()
            .map(|(id, name, username)| ShopPreview { id, name, username })
            .collect())
    }

    fn get_shop_by_id(&self, shop_id: &str) -> RepositoryResult<Option<DomainShop>> {
        use crate::schema::shops;

        let mut conn = self.conn()?;

        let shop = shops::table
            .filter(shops::id.eq(shop_id))
            .first::<DbShop>(&mut conn)
            .optional()?;

        shop.map(DomainShop::try_from).transpose()
    }

    fn get_shop_by_username(&self, username: &str) -> RepositoryResult<Option<DomainShop>> {
        use crate::schema::shops;

        let mut conn = self.conn()?;

        let shop = shops::table
            .filter(shops::username.eq(username))
            .first::<DbShop>(&mut conn)
            .optional()?;

        shop.map(DomainShop::try_from).transpose()
    }
}

impl ShopWriter for DieselRepository {
    fn create_shop(&self, new_shop: &DomainNewShop) -> RepositoryResult<DomainShop> {
        use crate::schema::shops;

        let mut conn = self.conn()?;

        conn.transaction::<DomainShop, RepositoryError, _>(|conn| {
            let id = new_id(IdKind::Shop);
            let base = slugify(&new_shop.name, "shop");
            let username = unique_slug(&base, |candidate| username_taken(conn, candidate))?;

            let insertable = DbNewShop::new(&id, &username, new_shop);

            let created = diesel::insert_into(shops::table)
                .values(&insertable)
                .get_result::<DbShop>(conn)?;

            created.try_into()
        })
    }

    fn update_shop(
        &self,
        shop_id: &str,
        updates: &DomainUpdateShop,
    ) -> RepositoryResult<DomainShop> {
        use crate::schema::shops;

        let mut conn = self.conn()?;

        let db_updates = DbUpdateShop::try_from(updates)?;

        let updated = diesel::update(shops::table.filter(shops::id.eq(shop_id)))
            .set(&db_updates)
            .get_result::<DbShop>(&mut conn)?;

        updated.try_into()
    }
}

fn username_taken(conn: &mut SqliteConnection, username: &str) -> RepositoryResult<bool> {
    use crate::schema::shops;

    let taken = select(exists(shops::table.filter(shops::username.eq(username))))
        .get_result(conn)?;

    Ok(taken)
}
