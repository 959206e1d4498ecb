use std::collections::BTreeMap;

use anyhow::Context;
use sqlx::SqlitePool;

pub async fn get_all(db: &SqlitePool) -> anyhow::Result<BTreeMap<String, String>> {
    let rows = sqlx::query_as::<_, (String, Option<String>)>("SELECT key, value FROM settings")
        .fetch_all(db)
        .await
        .context("list settings")?;
    Ok(rows
        .into_iter()
        .map(|(k, v)| (k, v.unwrap_or_default()))
        .collect())
}

/// Writes every pair in one transaction, replacing existing keys.
pub async fn upsert_many(db: &SqlitePool, pairs: &[(String, String)]) -> anyhow::Result<()> {
    let mut tx = db.begin().await.context("begin tx")?;
    for (key, value) in pairs {
        sqlx::query(
            r#"
            INSERT INTO settings (key, value) VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&mut *tx)
        .await
        .with_context(|| format!("upsert setting {key}"))?;
    }
    tx.commit().await.context("commit tx")?;
    Ok(())
}
