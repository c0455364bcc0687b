//! Blob entity - one named string value per row.
//!
//! Holds the persisted transaction snapshot for the `SQLite` blob store, keyed by
//! the application's blob key.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Blob database model - stores a string value under a unique key
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blobs")]
pub struct Model {
    /// Blob key (e.g. `"transactions"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    /// Serialized value
    #[sea_orm(column_type = "Text")]
    pub value: String,
    /// When this value was last written
    pub updated_at: DateTime,
}

/// `Blob` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
