use crate::schema::organizations;
use diesel::{Insertable, Queryable};
use serde_derive::{Deserialize, Serialize};
use std::time::SystemTime;

#[derive(Clone, Debug, Queryable, Serialize)]
pub struct QueryOrganization {
    #[serde(serialize_with = "crate::models::id_as_string")]
    pub id: i32,
    pub name: String,
    pub created_at: SystemTime,
}

/// Any id the client supplies alongside the name is discarded; the store
/// assigns a fresh one.
#[derive(Debug, Deserialize)]
pub struct IncomingOrganization {
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = organizations)]
pub struct NewOrganization {
    pub name: String,
    pub created_at: SystemTime,
}

impl IncomingOrganization {
    pub fn into_insertable(self) -> NewOrganization {
        NewOrganization {
            name: self.name,
            created_at: SystemTime::now(),
        }
    }
}
