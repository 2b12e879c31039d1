//! Custom extractors for Axum handlers.

pub mod id_path;

pub use id_path::{IdPath, LookupIdPath};
