//! # Domain Models
//!
//! Pure configuration types and well-known names shared by the kennel crates.
//! Keep it lean: no I/O and no behavior beyond defaults.

pub mod config;
pub mod constants;
