diesel::table! {
    organizations (id) {
        id -> Int4,
        name -> Varchar,
        created_at -> Timestamp,
    }
}

diesel::table! {
    users (id) {
        id -> Int4,
        org_id -> Int4,
        name -> Varchar,
        email -> Varchar,
        role -> Varchar,
        created_at -> Timestamp,
    }
}

diesel::table! {
    notes (id) {
        id -> Int4,
        org_id -> Int4,
        title -> Varchar,
        content -> Text,
        created_by -> Int4,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::allow_tables_to_appear_in_same_query!(organizations, users, notes);
