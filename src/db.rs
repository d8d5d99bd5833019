use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::ConnectionManager;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::errors::ServerError;

pub type Pool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Builds the process-lifetime pool and probes the store. An unreachable
/// store is fatal; the caller aborts startup.
pub fn connect(database_url: &str) -> Result<Pool, ServerError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .map_err(|_| ServerError::ConnectionError)?;

    // liveness probe
    let mut connection = pool.get().map_err(|_| ServerError::ConnectionError)?;
    diesel::sql_query("SELECT 1")
        .execute(&mut connection)
        .map_err(|_| ServerError::ConnectionError)?;
    log::info!("connected to postgres");

    Ok(pool)
}

pub fn run_migrations(pool: &Pool) -> Result<(), ServerError> {
    let mut connection = pool.get()?;
    connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|_| ServerError::DieselError)?;
    Ok(())
}
