//! Output formatting for catalog views

pub mod console;
