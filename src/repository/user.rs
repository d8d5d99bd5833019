use diesel::prelude::*;

use crate::errors::ServerError;
use crate::models::parse_public_id;
use crate::models::user::{NewUser, QueryUser};
use crate::schema::users::dsl::{id, org_id, users};

pub fn create(connection: &mut PgConnection, user: NewUser) -> Result<QueryUser, ServerError> {
    let created = diesel::insert_into(users)
        .values(&user)
        .get_result::<QueryUser>(connection)?;
    Ok(created)
}

/// With `org` set, the lookup is pinned to that tenant: a user that exists
/// under a different organization comes back as `None`, same as one that
/// does not exist at all.
pub fn get(
    connection: &mut PgConnection,
    public_id: &str,
    org: Option<i32>,
) -> Result<Option<QueryUser>, ServerError> {
    let user_id = match parse_public_id(public_id) {
        Some(parsed) => parsed,
        None => return Ok(None),
    };
    let mut query = users.filter(id.eq(user_id)).into_boxed();
    if let Some(org) = org {
        query = query.filter(org_id.eq(org));
    }
    let user = query.first::<QueryUser>(connection).optional()?;
    Ok(user)
}

pub fn list_by_org(
    connection: &mut PgConnection,
    org: i32,
) -> Result<Vec<QueryUser>, ServerError> {
    let members = users.filter(org_id.eq(org)).load::<QueryUser>(connection)?;
    Ok(members)
}
