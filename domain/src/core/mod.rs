//! Core domain concepts shared across both catalogs.
//!
//! - [`error::CatalogError`]: the failure taxonomy of a catalog load
//! - [`de::null_as_default`]: lenient field decoding for API payloads
//! - [`string::truncate`]: UTF-8 safe truncation for previews

pub mod de;
pub mod error;
pub mod string;
