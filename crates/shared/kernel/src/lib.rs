//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain models and owns config loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use kennel_kernel::config::load_config;
//! use kennel_kernel::domain::config::KennelConfig;
//!
//! let cfg: KennelConfig = load_config(Some("kennel.toml")).unwrap_or_default();
//! assert!(cfg.dog.obedience <= 5);
//! ```
pub mod config;

pub use kennel_domain as domain;
