use actix_web::{web, HttpResponse};
use serde_json::json;

use super::Pool;
use crate::{errors::ServerError, models::user::IncomingUser, repository};

/// The organization comes from the path and must exist; the body's own
/// tenancy fields never reach the store.
pub async fn new(
    org_path: web::Path<String>,
    input: web::Json<IncomingUser>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, ServerError> {
    let mut connection = pool.get()?;

    let org = match repository::organization::get(&mut connection, &org_path)? {
        Some(org) => org,
        None => return Err(ServerError::NotFound("Organization not found")),
    };

    let user =
        repository::user::create(&mut connection, input.into_inner().into_insertable(org.id))?;
    Ok(HttpResponse::Created().json(json!(user)))
}

pub async fn list(
    org_path: web::Path<String>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, ServerError> {
    let mut connection = pool.get()?;

    let org = match repository::organization::get(&mut connection, &org_path)? {
        Some(org) => org,
        None => return Err(ServerError::NotFound("Organization not found")),
    };

    let members = repository::user::list_by_org(&mut connection, org.id)?;
    Ok(HttpResponse::Ok().json(json!(members)))
}
