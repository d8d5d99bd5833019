use crate::schema::users;
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{Insertable, Queryable};
use serde_derive::{Deserialize, Serialize};
use std::io::Write;
use std::time::SystemTime;

/// Closed role set; stored as lowercase text, same form on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Reader,
    Writer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Reader => "reader",
            Role::Writer => "writer",
            Role::Admin => "admin",
        }
    }
}

impl ToSql<Text, Pg> for Role {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for Role {
    fn from_sql(bytes: PgValue) -> deserialize::Result<Self> {
        match <String as FromSql<Text, Pg>>::from_sql(bytes)?.as_str() {
            "reader" => Ok(Role::Reader),
            "writer" => Ok(Role::Writer),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unrecognized role: {}", other).into()),
        }
    }
}

#[derive(Clone, Debug, Queryable, Serialize)]
pub struct QueryUser {
    #[serde(serialize_with = "crate::models::id_as_string")]
    pub id: i32,
    #[serde(serialize_with = "crate::models::id_as_string")]
    pub org_id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: SystemTime,
}

/// The owning organization comes from the request path, never from the body;
/// a body-supplied `org_id` or `id` is ignored.
#[derive(Debug, Deserialize)]
pub struct IncomingUser {
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub org_id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: SystemTime,
}

impl IncomingUser {
    pub fn into_insertable(self, org_id: i32) -> NewUser {
        NewUser {
            org_id,
            name: self.name,
            email: self.email,
            role: self.role,
            created_at: SystemTime::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_form_is_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Writer).unwrap(), "\"writer\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn unknown_role_is_rejected_on_the_wire() {
        assert!(serde_json::from_str::<Role>("\"owner\"").is_err());
        assert!(serde_json::from_str::<Role>("\"Admin\"").is_err());
    }

    #[test]
    fn body_org_id_is_not_part_of_the_incoming_shape() {
        // serde tolerates (and drops) fields the server assigns itself
        let user: IncomingUser = serde_json::from_str(
            r#"{"org_id":"someone-elses-org","id":"7","name":"a","email":"a@b.c","role":"reader"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Reader);
    }
}
