use std::str::FromStr;

use anyhow::Context;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    Sqlite, SqlitePool, Transaction,
};
use tracing::info;

mod schema;
mod seed_data;

/// Open (and create if missing) the SQLite database behind `url`.
pub async fn connect(url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)
        .with_context(|| format!("parse database url {url}"))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let db = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .context("connect to database")?;
    Ok(db)
}

/// Single-connection in-memory database, used by tests.
#[cfg(test)]
pub async fn connect_in_memory() -> anyhow::Result<SqlitePool> {
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .context("open in-memory database")?;
    Ok(db)
}

/// File-backed pool in a throwaway directory, for tests that need real
/// concurrent connections. The directory lives as long as the returned guard.
#[cfg(test)]
pub async fn connect_temp_file() -> anyhow::Result<(SqlitePool, tempfile::TempDir)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let url = format!("sqlite://{}", dir.path().join("fitness.db").display());
    let db = connect(&url).await?;
    Ok((db, dir))
}

/// Create missing tables and seed defaults when the meal catalog is empty.
/// Safe to call on every start.
pub async fn init(db: &SqlitePool) -> anyhow::Result<()> {
    for stmt in schema::STATEMENTS {
        sqlx::query(stmt)
            .execute(db)
            .await
            .context("create table")?;
    }

    let (meal_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM meals")
        .fetch_one(db)
        .await
        .context("count meals")?;

    if meal_count == 0 {
        let mut tx = db.begin().await.context("begin tx")?;
        seed_defaults(&mut tx).await?;
        tx.commit().await.context("commit tx")?;
        info!("seeded default data");
    }
    Ok(())
}

async fn seed_defaults(tx: &mut Transaction<'_, Sqlite>) -> anyhow::Result<()> {
    for &(key, value) in seed_data::SETTINGS {
        sqlx::query("INSERT INTO settings (key, value) VALUES (?, ?)")
            .bind(key)
            .bind(value)
            .execute(&mut **tx)
            .await
            .context("seed settings")?;
    }

    for &(name, duration, intensity, distance, calories) in seed_data::EXERCISES {
        sqlx::query(
            r#"
            INSERT INTO exercise_params (name, duration, intensity, distance, calories)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(duration)
        .bind(intensity)
        .bind(distance)
        .bind(calories)
        .execute(&mut **tx)
        .await
        .context("seed exercise params")?;
    }

    for &(name, meal_type, ingredients, calories, protein) in seed_data::MEALS {
        sqlx::query(
            r#"
            INSERT INTO meals (name, meal_type, ingredients, calories, protein)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(meal_type.as_str())
        .bind(ingredients)
        .bind(calories)
        .bind(protein)
        .execute(&mut **tx)
        .await
        .context("seed meals")?;
    }

    for &(name, category, brand, spec, price, weekly_amount, note) in seed_data::SHOPPING {
        sqlx::query(
            r#"
            INSERT INTO shopping_list (name, category, brand, spec, price, weekly_amount, note)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(category)
        .bind(brand)
        .bind(spec)
        .bind(price)
        .bind(weekly_amount)
        .bind(note)
        .execute(&mut **tx)
        .await
        .context("seed shopping list")?;
    }

    Ok(())
}
