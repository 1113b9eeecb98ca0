//! Configuration module.
//!
//! Helper settings loaded from TOML files and environment variables.

pub use trellis_conf::*;
