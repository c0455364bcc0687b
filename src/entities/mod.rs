//! Entity module - `SeaORM` entity definitions for the database.

pub mod blob;

pub use blob::{Column as BlobColumn, Entity as Blob, Model as BlobModel};
