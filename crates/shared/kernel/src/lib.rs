//! Kernel utilities shared across geofeed crates.
//! Keep this crate lightweight; for now it owns layered configuration loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use geofeed_kernel::config::load_config;
//! use geofeed_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("geofeed.toml")).unwrap_or_default();
//! ```
pub mod config;

pub use geofeed_domain as domain;
