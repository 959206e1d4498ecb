use anyhow::Context;
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::dto::NewExercise;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ExerciseParam {
    pub id: i64,
    pub name: String,
    pub duration: Option<String>,
    pub intensity: Option<String>,
    pub distance: Option<String>,
    pub calories: Option<String>,
}

pub async fn list(db: &SqlitePool) -> anyhow::Result<Vec<ExerciseParam>> {
    let rows = sqlx::query_as::<_, ExerciseParam>(
        r#"
        SELECT id, name, duration, intensity, distance, calories
        FROM exercise_params
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await
    .context("list exercise params")?;
    Ok(rows)
}

pub async fn insert(db: &SqlitePool, ex: &NewExercise) -> anyhow::Result<i64> {
    let res = sqlx::query(
        r#"
        INSERT INTO exercise_params (name, duration, intensity, distance, calories)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&ex.name)
    .bind(&ex.duration)
    .bind(&ex.intensity)
    .bind(&ex.distance)
    .bind(&ex.calories)
    .execute(db)
    .await
    .context("insert exercise param")?;
    Ok(res.last_insert_rowid())
}

pub async fn update(db: &SqlitePool, id: i64, ex: &NewExercise) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        UPDATE exercise_params
           SET name = ?, duration = ?, intensity = ?, distance = ?, calories = ?
         WHERE id = ?
        "#,
    )
    .bind(&ex.name)
    .bind(&ex.duration)
    .bind(&ex.intensity)
    .bind(&ex.distance)
    .bind(&ex.calories)
    .bind(id)
    .execute(db)
    .await
    .context("update exercise param")?;
    Ok(())
}

pub async fn delete(db: &SqlitePool, id: i64) -> anyhow::Result<()> {
    sqlx::query("DELETE FROM exercise_params WHERE id = ?")
        .bind(id)
        .execute(db)
        .await
        .context("delete exercise param")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[tokio::test]
    async fn crud_roundtrip_on_seeded_table() {
        let db = db::connect_in_memory().await.unwrap();
        db::init(&db).await.unwrap();
        assert_eq!(list(&db).await.unwrap().len(), 3);

        let rowing = NewExercise {
            name: "划船機".into(),
            duration: "20 分鐘".into(),
            intensity: "阻力 5".into(),
            distance: "4 km".into(),
            calories: "200 kcal".into(),
        };
        let id = insert(&db, &rowing).await.unwrap();

        let mut longer = rowing.clone();
        longer.duration = "30 分鐘".into();
        update(&db, id, &longer).await.unwrap();

        let rows = list(&db).await.unwrap();
        let last = rows.last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.duration.as_deref(), Some("30 分鐘"));

        delete(&db, id).await.unwrap();
        assert_eq!(list(&db).await.unwrap().len(), 3);
    }
}
