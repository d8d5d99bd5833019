use diesel::prelude::*;

use crate::errors::ServerError;
use crate::models::note::{NewNote, QueryNote};
use crate::models::parse_public_id;
use crate::schema::notes::dsl::{id, notes, org_id};

pub fn create(connection: &mut PgConnection, note: NewNote) -> Result<QueryNote, ServerError> {
    let created = diesel::insert_into(notes)
        .values(&note)
        .get_result::<QueryNote>(connection)?;
    Ok(created)
}

pub fn get(
    connection: &mut PgConnection,
    public_id: &str,
    org: Option<i32>,
) -> Result<Option<QueryNote>, ServerError> {
    let note_id = match parse_public_id(public_id) {
        Some(parsed) => parsed,
        None => return Ok(None),
    };
    let mut query = notes.filter(id.eq(note_id)).into_boxed();
    if let Some(org) = org {
        query = query.filter(org_id.eq(org));
    }
    let note = query.first::<QueryNote>(connection).optional()?;
    Ok(note)
}

/// No explicit ordering; callers get the store's natural iteration order.
pub fn list_by_org(
    connection: &mut PgConnection,
    org: i32,
) -> Result<Vec<QueryNote>, ServerError> {
    let scoped = notes.filter(org_id.eq(org)).load::<QueryNote>(connection)?;
    Ok(scoped)
}

/// The id and tenant filter are matched in a single statement, so a valid id
/// under the wrong organization is indistinguishable from a nonexistent one.
pub fn delete(
    connection: &mut PgConnection,
    public_id: &str,
    org: i32,
) -> Result<bool, ServerError> {
    let note_id = match parse_public_id(public_id) {
        Some(parsed) => parsed,
        None => return Ok(false),
    };
    let removed = diesel::delete(notes.filter(id.eq(note_id)).filter(org_id.eq(org)))
        .execute(connection)?;
    Ok(removed == 1)
}
