use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use super::Pool;
use crate::{
    auth,
    errors::ServerError,
    models::{note::IncomingNote, user::Role},
    repository,
};

pub async fn new(
    req: HttpRequest,
    input: web::Json<IncomingNote>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, ServerError> {
    let mut connection = pool.get()?;
    let caller = auth::resolve_identity(&req, &mut connection)?;
    auth::require_role(&caller, &[Role::Writer, Role::Admin])?;

    // org_id and created_by always come from the resolved identity
    let note = repository::note::create(
        &mut connection,
        input
            .into_inner()
            .into_insertable(caller.org_id, caller.user_id),
    )?;
    Ok(HttpResponse::Created().json(json!(note)))
}

pub async fn list(req: HttpRequest, pool: web::Data<Pool>) -> Result<HttpResponse, ServerError> {
    let mut connection = pool.get()?;
    let caller = auth::resolve_identity(&req, &mut connection)?;

    let scoped = repository::note::list_by_org(&mut connection, caller.org_id)?;
    Ok(HttpResponse::Ok().json(json!(scoped)))
}

pub async fn get(
    note_id: web::Path<String>,
    req: HttpRequest,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, ServerError> {
    let mut connection = pool.get()?;
    let caller = auth::resolve_identity(&req, &mut connection)?;

    match repository::note::get(&mut connection, &note_id, Some(caller.org_id))? {
        Some(note) => Ok(HttpResponse::Ok().json(json!(note))),
        // absent and cross-tenant are indistinguishable on purpose
        None => Err(ServerError::NotFound("Note not found")),
    }
}

pub async fn del(
    note_id: web::Path<String>,
    req: HttpRequest,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, ServerError> {
    let mut connection = pool.get()?;
    let caller = auth::resolve_identity(&req, &mut connection)?;
    auth::require_role(&caller, &[Role::Admin])?;

    if repository::note::delete(&mut connection, &note_id, caller.org_id)? {
        Ok(HttpResponse::Ok().json(json!({ "message": "Note deleted" })))
    } else {
        Err(ServerError::NotFound("Note not found"))
    }
}
