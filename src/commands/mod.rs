//! Command implementations for the frontcheck CLI

pub mod validate;
