use diesel::prelude::*;

use crate::errors::ServerError;
use crate::models::organization::{NewOrganization, QueryOrganization};
use crate::models::parse_public_id;
use crate::schema::organizations::dsl::{id, organizations};

pub fn create(
    connection: &mut PgConnection,
    org: NewOrganization,
) -> Result<QueryOrganization, ServerError> {
    let created = diesel::insert_into(organizations)
        .values(&org)
        .get_result::<QueryOrganization>(connection)?;
    Ok(created)
}

pub fn get(
    connection: &mut PgConnection,
    public_id: &str,
) -> Result<Option<QueryOrganization>, ServerError> {
    let org_id = match parse_public_id(public_id) {
        Some(parsed) => parsed,
        None => return Ok(None),
    };
    let org = organizations
        .filter(id.eq(org_id))
        .first::<QueryOrganization>(connection)
        .optional()?;
    Ok(org)
}

pub fn list(connection: &mut PgConnection) -> Result<Vec<QueryOrganization>, ServerError> {
    let orgs = organizations.load::<QueryOrganization>(connection)?;
    Ok(orgs)
}
