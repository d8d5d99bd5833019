use actix_web::{web, HttpResponse};
use serde_json::json;

use super::Pool;
use crate::{errors::ServerError, models::organization::IncomingOrganization, repository};

// No authorization gate on either operation; anyone can create a tenant and
// listing spans all tenants. Preserved as observed in the upstream design,
// see DESIGN.md.

pub async fn new(
    input: web::Json<IncomingOrganization>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, ServerError> {
    let mut connection = pool.get()?;
    let org =
        repository::organization::create(&mut connection, input.into_inner().into_insertable())?;
    Ok(HttpResponse::Created().json(json!(org)))
}

pub async fn list(pool: web::Data<Pool>) -> Result<HttpResponse, ServerError> {
    let mut connection = pool.get()?;
    let orgs = repository::organization::list(&mut connection)?;
    Ok(HttpResponse::Ok().json(json!(orgs)))
}
