use anyhow::Context;
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::dto::NewWeightRecord;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WeightRecord {
    pub id: i64,
    pub date: String,
    pub weight: f64,
    pub day: Option<i64>,
}

pub async fn list(db: &SqlitePool) -> anyhow::Result<Vec<WeightRecord>> {
    let rows = sqlx::query_as::<_, WeightRecord>(
        r#"
        SELECT id, date, weight, day
        FROM weight_records
        ORDER BY date DESC
        "#,
    )
    .fetch_all(db)
    .await
    .context("list weight records")?;
    Ok(rows)
}

/// One row per date: an existing date is overwritten in place and keeps its id.
pub async fn upsert(db: &SqlitePool, record: &NewWeightRecord) -> anyhow::Result<i64> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO weight_records (date, weight, day)
        VALUES (?, ?, ?)
        ON CONFLICT(date) DO UPDATE SET weight = excluded.weight, day = excluded.day
        RETURNING id
        "#,
    )
    .bind(&record.date)
    .bind(record.weight)
    .bind(record.day)
    .fetch_one(db)
    .await
    .context("upsert weight record")?;
    Ok(id)
}

pub async fn delete(db: &SqlitePool, id: i64) -> anyhow::Result<()> {
    sqlx::query("DELETE FROM weight_records WHERE id = ?")
        .bind(id)
        .execute(db)
        .await
        .context("delete weight record")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    async fn fresh_db() -> SqlitePool {
        let db = db::connect_in_memory().await.unwrap();
        db::init(&db).await.unwrap();
        db
    }

    fn record(date: &str, weight: f64, day: i64) -> NewWeightRecord {
        NewWeightRecord {
            date: date.into(),
            weight,
            day,
        }
    }

    #[tokio::test]
    async fn upsert_same_date_overwrites_in_place() {
        let db = fresh_db().await;
        let first = upsert(&db, &record("2024-01-05", 119.0, 1)).await.unwrap();
        let second = upsert(&db, &record("2024-01-05", 118.4, 2)).await.unwrap();
        assert_eq!(first, second);

        let rows = list(&db).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].weight, 118.4);
        assert_eq!(rows[0].day, Some(2));
    }

    #[tokio::test]
    async fn list_is_newest_date_first() {
        let db = fresh_db().await;
        upsert(&db, &record("2024-01-03", 118.0, 3)).await.unwrap();
        upsert(&db, &record("2024-01-10", 116.5, 10)).await.unwrap();
        upsert(&db, &record("2024-01-01", 119.0, 1)).await.unwrap();

        let dates: Vec<String> = list(&db).await.unwrap().into_iter().map(|r| r.date).collect();
        assert_eq!(dates, vec!["2024-01-10", "2024-01-03", "2024-01-01"]);
    }

    #[tokio::test]
    async fn concurrent_upserts_keep_one_row_per_date() {
        let (db, _dir) = db::connect_temp_file().await.unwrap();
        db::init(&db).await.unwrap();
        let handles: Vec<_> = (0..32i32)
            .map(|i| {
                let db = db.clone();
                tokio::spawn(async move {
                    upsert(&db, &record("2024-02-01", 110.0 + f64::from(i), 1)).await
                })
            })
            .collect();
        for h in handles {
            h.await.unwrap().unwrap();
        }

        let (n,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM weight_records WHERE date = '2024-02-01'")
                .fetch_one(&db)
                .await
                .unwrap();
        assert_eq!(n, 1);
    }
}
