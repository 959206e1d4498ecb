use anyhow::Context;
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::dto::ChecklistWrite;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ChecklistEntry {
    pub id: i64,
    pub date: String,
    pub item_key: String,
    pub checked: i64, // 0 or 1
}

pub async fn list_by_date(db: &SqlitePool, date: &str) -> anyhow::Result<Vec<ChecklistEntry>> {
    let rows = sqlx::query_as::<_, ChecklistEntry>(
        r#"
        SELECT id, date, item_key, checked
        FROM daily_checklist
        WHERE date = ?
        ORDER BY id
        "#,
    )
    .bind(date)
    .fetch_all(db)
    .await
    .context("list checklist")?;
    Ok(rows)
}

/// One row per (date, item_key); a repeat write only flips `checked`.
pub async fn upsert(db: &SqlitePool, entry: &ChecklistWrite) -> anyhow::Result<i64> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO daily_checklist (date, item_key, checked)
        VALUES (?, ?, ?)
        ON CONFLICT(date, item_key) DO UPDATE SET checked = excluded.checked
        RETURNING id
        "#,
    )
    .bind(&entry.date)
    .bind(&entry.item_key)
    .bind(i64::from(entry.checked))
    .fetch_one(db)
    .await
    .context("upsert checklist entry")?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn entry(date: &str, key: &str, checked: bool) -> ChecklistWrite {
        ChecklistWrite {
            date: date.into(),
            item_key: key.into(),
            checked,
        }
    }

    #[tokio::test]
    async fn upsert_same_pair_overwrites_checked() {
        let db = db::connect_in_memory().await.unwrap();
        db::init(&db).await.unwrap();

        let first = upsert(&db, &entry("2024-01-05", "water", true)).await.unwrap();
        let second = upsert(&db, &entry("2024-01-05", "water", false)).await.unwrap();
        upsert(&db, &entry("2024-01-05", "steps", true)).await.unwrap();
        upsert(&db, &entry("2024-01-06", "water", true)).await.unwrap();
        assert_eq!(first, second);

        let rows = list_by_date(&db, "2024-01-05").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].item_key, "water");
        assert_eq!(rows[0].checked, 0);
        assert_eq!(rows[1].item_key, "steps");
        assert_eq!(rows[1].checked, 1);
    }

    #[tokio::test]
    async fn concurrent_upserts_keep_one_row_per_item() {
        let (db, _dir) = db::connect_temp_file().await.unwrap();
        db::init(&db).await.unwrap();
        let handles: Vec<_> = (0..32)
            .map(|i| {
                let db = db.clone();
                tokio::spawn(async move {
                    upsert(&db, &entry("2024-02-01", "water", i % 2 == 0)).await
                })
            })
            .collect();
        let mut ids = Vec::new();
        for h in handles {
            ids.push(h.await.unwrap().unwrap());
        }
        ids.dedup();
        assert_eq!(ids.len(), 1);

        let rows = list_by_date(&db, "2024-02-01").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, ids[0]);
    }
}
