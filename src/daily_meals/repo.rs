use anyhow::Context;
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::dto::NewDailyMeal;
use crate::types::{MealType, MEAL_TYPE_ORDER};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DailyMeal {
    pub id: i64,
    pub date: String,
    pub meal_type: String,
    pub meal_id: Option<i64>,
    pub meal_name: Option<String>,
}

pub async fn list_by_date(db: &SqlitePool, date: &str) -> anyhow::Result<Vec<DailyMeal>> {
    let sql = format!(
        "SELECT id, date, meal_type, meal_id, meal_name
         FROM daily_meals
         WHERE date = ?
         ORDER BY {MEAL_TYPE_ORDER}, id"
    );
    let rows = sqlx::query_as::<_, DailyMeal>(&sql)
        .bind(date)
        .fetch_all(db)
        .await
        .context("list daily meals")?;
    Ok(rows)
}

/// Every logged meal, newest day first.
pub async fn history(db: &SqlitePool) -> anyhow::Result<Vec<DailyMeal>> {
    let sql = format!(
        "SELECT id, date, meal_type, meal_id, meal_name
         FROM daily_meals
         ORDER BY date DESC, {MEAL_TYPE_ORDER}, id"
    );
    let rows = sqlx::query_as::<_, DailyMeal>(&sql)
        .fetch_all(db)
        .await
        .context("list meal history")?;
    Ok(rows)
}

pub async fn insert(db: &SqlitePool, record: &NewDailyMeal) -> anyhow::Result<i64> {
    let res = sqlx::query(
        r#"
        INSERT INTO daily_meals (date, meal_type, meal_id, meal_name)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&record.date)
    .bind(record.meal_type.as_str())
    .bind(record.meal_id)
    .bind(&record.meal_name)
    .execute(db)
    .await
    .context("insert daily meal")?;
    Ok(res.last_insert_rowid())
}

pub async fn delete(db: &SqlitePool, id: i64) -> anyhow::Result<()> {
    sqlx::query("DELETE FROM daily_meals WHERE id = ?")
        .bind(id)
        .execute(db)
        .await
        .context("delete daily meal")?;
    Ok(())
}

/// Removes every record in one slot of one day. Returns how many went.
pub async fn clear(db: &SqlitePool, date: &str, meal_type: MealType) -> anyhow::Result<u64> {
    let res = sqlx::query("DELETE FROM daily_meals WHERE date = ? AND meal_type = ?")
        .bind(date)
        .bind(meal_type.as_str())
        .execute(db)
        .await
        .context("clear daily meals")?;
    Ok(res.rows_affected())
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

    fn record(date: &str, meal_type: MealType, name: &str) -> NewDailyMeal {
        NewDailyMeal {
            date: date.into(),
            meal_type,
            meal_id: None,
            meal_name: name.into(),
        }
    }

    #[tokio::test]
    async fn clear_only_touches_one_slot_of_one_day() {
        let db = fresh_db().await;
        insert(&db, &record("2024-01-05", MealType::Breakfast, "b")).await.unwrap();
        insert(&db, &record("2024-01-05", MealType::Lunch, "l1")).await.unwrap();
        insert(&db, &record("2024-01-05", MealType::Lunch, "l2")).await.unwrap();
        insert(&db, &record("2024-01-05", MealType::Dinner, "d")).await.unwrap();
        insert(&db, &record("2024-01-06", MealType::Lunch, "next day")).await.unwrap();

        let removed = clear(&db, "2024-01-05", MealType::Lunch).await.unwrap();
        assert_eq!(removed, 2);

        let left: Vec<String> = list_by_date(&db, "2024-01-05")
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.meal_type)
            .collect();
        assert_eq!(left, vec!["breakfast", "dinner"]);
        assert_eq!(list_by_date(&db, "2024-01-06").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn history_is_newest_day_first_then_slot() {
        let db = fresh_db().await;
        insert(&db, &record("2024-01-01", MealType::Dinner, "a")).await.unwrap();
        insert(&db, &record("2024-01-02", MealType::Dinner, "b")).await.unwrap();
        insert(&db, &record("2024-01-02", MealType::Breakfast, "c")).await.unwrap();

        let names: Vec<String> = history(&db)
            .await
            .unwrap()
            .into_iter()
            .filter_map(|r| r.meal_name)
            .collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn record_survives_catalog_delete() {
        let db = fresh_db().await;
        let (meal_id,): (i64,) = sqlx::query_as("SELECT id FROM meals ORDER BY id LIMIT 1")
            .fetch_one(&db)
            .await
            .unwrap();
        let mut rec = record("2024-01-05", MealType::Breakfast, "經典雞胸蛋");
        rec.meal_id = Some(meal_id);
        insert(&db, &rec).await.unwrap();

        sqlx::query("DELETE FROM meals WHERE id = ?")
            .bind(meal_id)
            .execute(&db)
            .await
            .unwrap();

        let rows = list_by_date(&db, "2024-01-05").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].meal_id, Some(meal_id));
        assert_eq!(rows[0].meal_name.as_deref(), Some("經典雞胸蛋"));
    }
}
