//! Storage layer.
//!
//! Stores own their data and return domain models; entity models never leave this layer.

pub mod edit_log;

#[cfg(test)]
mod test;
