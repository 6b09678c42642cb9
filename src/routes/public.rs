use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::services::{ServiceError, public as public_service};

#[get("/m/{username}")]
/// Return the public profile of a shop together with its published menus.
pub async fn show_shop(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let username = path.into_inner();

    match public_service::load_shop_page(repo.get_ref(), &username) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(ServiceError::NotFound(_)) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to load shop {username}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/m/{username}/menu/{slug}")]
/// Return one published menu with the base price of every dish.
pub async fn show_menu(
    path: web::Path<(String, String)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (username, slug) = path.into_inner();

    match public_service::load_menu_page(repo.get_ref(), &username, &slug) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(ServiceError::NotFound(_)) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to load menu {slug} of {username}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
