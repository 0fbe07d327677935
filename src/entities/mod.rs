//! Entity module - SeaORM entity definitions for the database.
//! The store only needs a key-value table; trips are kept as one document.

pub mod key_value;

pub use key_value::{Column as KeyValueColumn, Entity as KeyValue, Model as KeyValueModel};
