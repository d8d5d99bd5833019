pub mod note;
pub mod organization;
pub mod user;

pub use crate::db::Pool;

pub async fn index() -> impl actix_web::Responder {
    actix_web::HttpResponse::Ok().json(serde_json::json!({ "message": "Multi-Tenant Notes API" }))
}
