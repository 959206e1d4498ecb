use anyhow::Context;
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::dto::NewMeal;
use crate::types::MEAL_TYPE_ORDER;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Meal {
    pub id: i64,
    pub name: String,
    pub meal_type: String,
    pub ingredients: Option<String>,
    pub calories: Option<i64>,
    pub protein: Option<i64>,
}

/// Whole catalog, breakfast then lunch then dinner, insertion order within a slot.
pub async fn list(db: &SqlitePool) -> anyhow::Result<Vec<Meal>> {
    let sql = format!(
        "SELECT id, name, meal_type, ingredients, calories, protein
         FROM meals
         ORDER BY {MEAL_TYPE_ORDER}, id"
    );
    let rows = sqlx::query_as::<_, Meal>(&sql)
        .fetch_all(db)
        .await
        .context("list meals")?;
    Ok(rows)
}

pub async fn insert(db: &SqlitePool, meal: &NewMeal) -> anyhow::Result<i64> {
    let res = sqlx::query(
        r#"
        INSERT INTO meals (name, meal_type, ingredients, calories, protein)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&meal.name)
    .bind(meal.meal_type.as_str())
    .bind(&meal.ingredients)
    .bind(meal.calories)
    .bind(meal.protein)
    .execute(db)
    .await
    .context("insert meal")?;
    Ok(res.last_insert_rowid())
}

/// Full replacement. An unknown id matches nothing and is not an error.
pub async fn update(db: &SqlitePool, id: i64, meal: &NewMeal) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        UPDATE meals
           SET name = ?, meal_type = ?, ingredients = ?, calories = ?, protein = ?
         WHERE id = ?
        "#,
    )
    .bind(&meal.name)
    .bind(meal.meal_type.as_str())
    .bind(&meal.ingredients)
    .bind(meal.calories)
    .bind(meal.protein)
    .bind(id)
    .execute(db)
    .await
    .context("update meal")?;
    Ok(())
}

pub async fn delete(db: &SqlitePool, id: i64) -> anyhow::Result<()> {
    sqlx::query("DELETE FROM meals WHERE id = ?")
        .bind(id)
        .execute(db)
        .await
        .context("delete meal")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db, types::MealType};

    async fn empty_db() -> SqlitePool {
        let db = db::connect_in_memory().await.unwrap();
        db::init(&db).await.unwrap();
        sqlx::query("DELETE FROM meals").execute(&db).await.unwrap();
        db
    }

    fn meal(name: &str, meal_type: MealType) -> NewMeal {
        NewMeal {
            name: name.into(),
            meal_type,
            ingredients: "雞胸肉 200g".into(),
            calories: 500,
            protein: 60,
        }
    }

    #[tokio::test]
    async fn list_orders_by_slot_then_insertion() {
        let db = empty_db().await;
        let d = insert(&db, &meal("d", MealType::Dinner)).await.unwrap();
        let l = insert(&db, &meal("l", MealType::Lunch)).await.unwrap();
        let b2 = insert(&db, &meal("b2", MealType::Breakfast)).await.unwrap();
        let b1 = insert(&db, &meal("b1", MealType::Breakfast)).await.unwrap();

        let ids: Vec<i64> = list(&db).await.unwrap().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![b2, b1, l, d]);
    }

    #[tokio::test]
    async fn inserted_meal_lists_with_submitted_fields() {
        let db = empty_db().await;
        let id = insert(&db, &meal("蒜香蝦", MealType::Dinner)).await.unwrap();

        let rows = list(&db).await.unwrap();
        let row = rows.iter().find(|m| m.id == id).expect("row listed");
        assert_eq!(row.name, "蒜香蝦");
        assert_eq!(row.meal_type, "dinner");
        assert_eq!(row.ingredients.as_deref(), Some("雞胸肉 200g"));
        assert_eq!(row.calories, Some(500));
        assert_eq!(row.protein, Some(60));
    }

    #[tokio::test]
    async fn update_replaces_all_fields_and_ignores_unknown_id() {
        let db = empty_db().await;
        let id = insert(&db, &meal("old", MealType::Lunch)).await.unwrap();

        let mut replacement = meal("new", MealType::Breakfast);
        replacement.calories = 321;
        update(&db, id, &replacement).await.unwrap();
        update(&db, id + 1000, &replacement).await.unwrap();

        let rows = list(&db).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "new");
        assert_eq!(rows[0].meal_type, "breakfast");
        assert_eq!(rows[0].calories, Some(321));
    }

    #[tokio::test]
    async fn delete_twice_is_not_an_error() {
        let db = empty_db().await;
        let id = insert(&db, &meal("x", MealType::Lunch)).await.unwrap();
        delete(&db, id).await.unwrap();
        delete(&db, id).await.unwrap();
        assert!(list(&db).await.unwrap().is_empty());
    }
}
