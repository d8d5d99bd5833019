use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use multinote::db;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let port = std::env::var("PORT").expect("env PORT");
    let database_url = std::env::var("DATABASE_URL").expect("env DATABASE_URL");

    // an unreachable store aborts startup
    let pool = db::connect(&database_url).expect("failed to connect to postgres");
    db::run_migrations(&pool).expect("failed to run migrations");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(multinote::routes)
    })
    .bind(format!("0.0.0.0:{}", port))?
    .run()
    .await
}
