//! Key-value entity - Durable storage for whole documents under a single key.
//!
//! The trip log lives here as one JSON document (the full trip sequence) under
//! the configured trips key. Writes replace the value in full.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Key-value database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "key_value_store")]
pub struct Model {
    /// Storage key (e.g., `"fretesmart_trips"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    /// Serialized document
    #[sea_orm(column_type = "Text")]
    pub value: String,
    /// When this key was last written
    pub updated_at: DateTimeUtc,
}

/// `KeyValue` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
