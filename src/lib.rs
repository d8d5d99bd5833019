use actix_web::web;

pub mod auth;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod schema;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .service(
            web::scope("/organizations")
                .route("", web::post().to(handlers::organization::new))
                .route("", web::get().to(handlers::organization::list))
                .route("/{org_id}/users", web::post().to(handlers::user::new))
                .route("/{org_id}/users", web::get().to(handlers::user::list)),
        )
        .service(
            web::scope("/notes")
                .route("", web::post().to(handlers::note::new))
                .route("", web::get().to(handlers::note::list))
                .route("/{id}", web::get().to(handlers::note::get))
                .route("/{id}", web::delete().to(handlers::note::del)),
        );
}
