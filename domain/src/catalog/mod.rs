//! Catalog plumbing shared by cards and items.
//!
//! - [`endpoint::Endpoint`]: where a catalog is fetched from
//! - [`kind::Catalog`]: record type, cache key and body decoder per catalog
//! - [`load_state::LoadState`]: not started / loading / loaded / failed

pub mod endpoint;
pub mod kind;
pub mod load_state;
