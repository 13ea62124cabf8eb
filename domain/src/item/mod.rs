//! HowBazaar items.

pub mod entities;
