use serde::Serializer;

pub mod note;
pub mod organization;
pub mod user;

/// Projects a store-native id into its public string form. The numeric key
/// itself never appears in a payload.
pub fn id_as_string<S: Serializer>(id: &i32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(id)
}

/// Parses a public identifier back into the store-native key. Anything that is
/// not a valid key means "no such record" for the caller, never an error.
pub fn parse_public_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok()
}
