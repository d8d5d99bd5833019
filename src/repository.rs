//! One module per entity, plain functions over a checked-out connection.
//! Every call is a fresh query; nothing is cached across requests.

pub mod note;
pub mod organization;
pub mod user;
