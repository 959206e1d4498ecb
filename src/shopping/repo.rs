use anyhow::Context;
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::dto::NewShoppingItem;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ShoppingItem {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub spec: Option<String>,
    pub price: Option<String>,
    pub weekly_amount: Option<String>,
    pub note: Option<String>,
}

pub async fn list(db: &SqlitePool) -> anyhow::Result<Vec<ShoppingItem>> {
    let rows = sqlx::query_as::<_, ShoppingItem>(
        r#"
        SELECT id, name, category, brand, spec, price, weekly_amount, note
        FROM shopping_list
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await
    .context("list shopping items")?;
    Ok(rows)
}

pub async fn insert(db: &SqlitePool, item: &NewShoppingItem) -> anyhow::Result<i64> {
    let res = sqlx::query(
        r#"
        INSERT INTO shopping_list (name, category, brand, spec, price, weekly_amount, note)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&item.name)
    .bind(&item.category)
    .bind(&item.brand)
    .bind(&item.spec)
    .bind(&item.price)
    .bind(&item.weekly_amount)
    .bind(&item.note)
    .execute(db)
    .await
    .context("insert shopping item")?;
    Ok(res.last_insert_rowid())
}

pub async fn update(db: &SqlitePool, id: i64, item: &NewShoppingItem) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        UPDATE shopping_list
           SET name = ?, category = ?, brand = ?, spec = ?, price = ?, weekly_amount = ?, note = ?
         WHERE id = ?
        "#,
    )
    .bind(&item.name)
    .bind(&item.category)
    .bind(&item.brand)
    .bind(&item.spec)
    .bind(&item.price)
    .bind(&item.weekly_amount)
    .bind(&item.note)
    .bind(id)
    .execute(db)
    .await
    .context("update shopping item")?;
    Ok(())
}

pub async fn delete(db: &SqlitePool, id: i64) -> anyhow::Result<()> {
    sqlx::query("DELETE FROM shopping_list WHERE id = ?")
        .bind(id)
        .execute(db)
        .await
        .context("delete shopping item")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db, shopping::dto::ShoppingPayload};

    #[tokio::test]
    async fn optional_fields_default_to_empty_text() {
        let db = db::connect_in_memory().await.unwrap();
        db::init(&db).await.unwrap();

        let payload: ShoppingPayload = serde_json::from_value(serde_json::json!({
            "name": "鮪魚罐頭",
            "category": "protein"
        }))
        .unwrap();
        let id = insert(&db, &payload.validate().unwrap()).await.unwrap();

        let rows = list(&db).await.unwrap();
        let last = rows.last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.category.as_deref(), Some("protein"));
        assert_eq!(last.brand.as_deref(), Some(""));
        assert_eq!(last.note.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn list_is_in_insertion_order() {
        let db = db::connect_in_memory().await.unwrap();
        db::init(&db).await.unwrap();
        let ids: Vec<i64> = list(&db).await.unwrap().into_iter().map(|i| i.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), 31);
    }
}
