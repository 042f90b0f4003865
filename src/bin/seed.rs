//! Seed the database with sample apiaries and hives.
//!
//! Run with: cargo run --bin seed
//! Skips seeding when the database already contains ruchers.

use sea_orm::{
    ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, EntityTrait, PaginatorTrait,
    Statement,
};
use sea_orm_migration::MigratorTrait;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use beetrack_api::config::Config;
use beetrack_api::entity::{ruchers, ruches};
use beetrack_api::error::{AppError, AppResult};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let db = Database::connect(&config.database_url).await?;
    migration::Migrator::up(&db, None).await?;

    if ruchers::Entity::find().count(&db).await? > 0 {
        tracing::info!("Database already contains data. Skipping seeding.");
        return Ok(());
    }

    let rucher_central = insert_rucher(
        &db,
        "Apiary Central Park",
        "Main apiary in Central Park",
        "POINT(-73.9654 40.7829)",
    )
    .await?;
    let rucher_brooklyn = insert_rucher(
        &db,
        "Apiary Brooklyn Bridge",
        "Apiary near Brooklyn Bridge",
        "POINT(-73.9969 40.7061)",
    )
    .await?;

    insert_ruche(
        &db,
        "Hive Alpha",
        rucher_central,
        serde_json::json!({"age": 2, "breed": "Italian"}),
        "POINT(-73.9654 40.7829)",
    )
    .await?;
    insert_ruche(
        &db,
        "Hive Beta",
        rucher_central,
        serde_json::json!({"age": 1, "breed": "Carniolan"}),
        "POINT(-73.9644 40.7839)",
    )
    .await?;
    insert_ruche(
        &db,
        "Hive Gamma",
        rucher_brooklyn,
        serde_json::json!({"age": 3, "breed": "Buckfast"}),
        "POINT(-73.9969 40.7061)",
    )
    .await?;

    let n_ruchers = ruchers::Entity::find().count(&db).await?;
    let n_ruches = ruches::Entity::find().count(&db).await?;
    tracing::info!("Database seeded with {n_ruchers} ruchers and {n_ruches} ruches");

    Ok(())
}

async fn insert_rucher(
    db: &DatabaseConnection,
    name: &str,
    description: &str,
    wkt: &str,
) -> AppResult<i32> {
    let row = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "INSERT INTO ruchers (name, description, geom)
             VALUES ($1, $2, ST_GeomFromText($3, 4326))
             RETURNING id",
            [name.into(), description.into(), wkt.into()],
        ))
        .await?
        .ok_or_else(|| AppError::Internal("Insert returned no row".to_string()))?;

    row.try_get("", "id").map_err(Into::into)
}

async fn insert_ruche(
    db: &DatabaseConnection,
    name: &str,
    rucher_id: i32,
    queen_info: serde_json::Value,
    wkt: &str,
) -> AppResult<()> {
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        "INSERT INTO ruches (name, rucher_id, queen_info, geom, active)
         VALUES ($1, $2, $3, ST_GeomFromText($4, 4326), TRUE)",
        [name.into(), rucher_id.into(), queen_info.into(), wkt.into()],
    ))
    .await?;

    Ok(())
}
