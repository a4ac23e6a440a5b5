//! # HL7 Field Store Configuration
//!
//! Settings and tracing setup shared by the field store crates.
//!
//! ## Features
//!
//! - **Store Settings**: validation policy switches, materialization mode,
//!   logging level, layered from defaults, TOML files and `HL7STORE__*`
//!   environment variables
//! - **Tracing Setup**: one-call `tracing-subscriber` installation
//!
//! ## Usage
//!
//! ```rust
//! use config::{init_tracing, StoreSettings};
//!
//! let settings = StoreSettings::from_toml_str("[validation]\nstrict = true\n").unwrap();
//! assert!(settings.validation.strict);
//!
//! init_tracing(&settings.logging).unwrap();
//! ```

pub mod logging;
pub mod settings;

// Re-export commonly used types
pub use logging::init_tracing;
pub use settings::{
    LoggingSettings, MaterializationSettings, StoreSettings, ValidationSettings, ENV_PREFIX,
    ENV_SEPARATOR,
};
