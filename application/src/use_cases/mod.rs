//! Use cases (application services)

pub mod catalog_session;
pub mod load_catalog;

#[cfg(test)]
pub(crate) mod test_support;
