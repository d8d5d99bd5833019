use crate::schema::notes;
use diesel::{Insertable, Queryable};
use serde_derive::{Deserialize, Serialize};
use std::time::SystemTime;

#[derive(Clone, Debug, Queryable, Serialize)]
pub struct QueryNote {
    #[serde(serialize_with = "crate::models::id_as_string")]
    pub id: i32,
    #[serde(serialize_with = "crate::models::id_as_string")]
    pub org_id: i32,
    pub title: String,
    pub content: String,
    #[serde(serialize_with = "crate::models::id_as_string")]
    pub created_by: i32,
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
}

/// The wire shape also carries `org_id` and `created_by`, but those are
/// always overwritten from the resolved caller identity, so the incoming
/// struct does not even bind them.
#[derive(Debug, Deserialize)]
pub struct IncomingNote {
    pub title: String,
    pub content: String,
}

#[derive(Insertable)]
#[diesel(table_name = notes)]
pub struct NewNote {
    pub org_id: i32,
    pub title: String,
    pub content: String,
    pub created_by: i32,
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
}

impl IncomingNote {
    /// There is no edit operation, so `updated_at` starts equal to
    /// `created_at` and stays that way.
    pub fn into_insertable(self, org_id: i32, created_by: i32) -> NewNote {
        let time_now = SystemTime::now();
        NewNote {
            org_id,
            title: self.title,
            content: self.content,
            created_by,
            created_at: time_now,
            updated_at: time_now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_supplied_tenancy_fields_are_dropped() {
        let note: IncomingNote = serde_json::from_str(
            r#"{"org_id":"42","created_by":"13","id":"1","title":"t","content":"c"}"#,
        )
        .unwrap();
        let insertable = note.into_insertable(7, 3);
        assert_eq!(insertable.org_id, 7);
        assert_eq!(insertable.created_by, 3);
    }
}
