//! # Veneer Core
//!
//! Leaf utilities shared by every layer of the skin runtime:
//! - Coercion of raw markup attribute strings into typed values
//! - Case-insensitive identifier comparison
//! - Runtime configuration, loaded once from TOML
//!
//! ## Example
//!
//! ```rust
//! use veneer_core::coerce::{num, px, to_bool};
//!
//! assert_eq!(num("200").unwrap(), 200.0);
//! assert_eq!(px(Some(200.0)), "200px");
//! assert_eq!(px(None), "");
//! assert!(to_bool("1").unwrap());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod coerce;
pub mod config;
pub mod error;
pub mod ident;

pub use config::{BuildConfig, RenderConfig, RuntimeConfig};
pub use error::{CoerceError, CoerceResult, ConfigError, ConfigResult};
pub use ident::ids_match;
