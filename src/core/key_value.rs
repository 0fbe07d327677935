//! Key-value persistence over the `key_value_store` table.
//!
//! A key holds one whole document; writes replace it in full (upsert).

use crate::{
    entities::{KeyValue, key_value},
    errors::Result,
};
use sea_orm::{Set, prelude::*, sea_query::OnConflict};
use tracing::{debug, instrument};

/// Reads the value stored under `key`, or `None` if the key was never written.
#[instrument(skip(db))]
pub async fn get_value(db: &DatabaseConnection, key: &str) -> Result<Option<String>> {
    let entry = KeyValue::find_by_id(key.to_string()).one(db).await?;
    debug!("Key '{}' present: {}", key, entry.is_some());
    Ok(entry.map(|model| model.value))
}

/// Writes `value` under `key`, replacing any previous value.
#[instrument(skip(db, value), fields(bytes = value.len()))]
pub async fn set_value(db: &DatabaseConnection, key: &str, value: &str) -> Result<()> {
    let entry = key_value::ActiveModel {
        key: Set(key.to_string()),
        value: Set(value.to_string()),
        updated_at: Set(chrono::Utc::now()),
    };

    KeyValue::insert(entry)
        .on_conflict(
            OnConflict::column(key_value::Column::Key)
                .update_columns([key_value::Column::Value, key_value::Column::UpdatedAt])
                .to_owned(),
        )
        .exec(db)
        .await?;

    debug!("Wrote key '{}'", key);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn test_get_missing_key() -> Result<()> {
        let db = setup_test_db().await?;
        assert_eq!(get_value(&db, "nothing_here").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_set_and_get_new_key() -> Result<()> {
        let db = setup_test_db().await?;
        set_value(&db, "test_key_1", "test_value_1").await?;
        assert_eq!(
            get_value(&db, "test_key_1").await?,
            Some("test_value_1".to_string())
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_set_overwrites_existing_key() -> Result<()> {
        let db = setup_test_db().await?;
        set_value(&db, "doc", "[]").await?;
        set_value(&db, "doc", "[1]").await?;

        assert_eq!(get_value(&db, "doc").await?, Some("[1]".to_string()));
        assert_eq!(KeyValue::find().count(&db).await?, 1);
        Ok(())
    }
}
