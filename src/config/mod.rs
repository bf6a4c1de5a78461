//! Configuration layer for the sailthru client.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Per-site sender details ([`SiteDirectory`], [`SiteInformation`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - `--api-key`, `--secret`, `--api-uri`
//! 2. **TOML config file** - Values from the `[api]` section
//! 3. **Built-in defaults** - Only the API URI has one
//!
//! `api_key` and `secret` are required; every command except `init`
//! needs them.
//!
//! Site sender details are TOML-only.

mod cli;
pub mod defaults;
mod error;
mod sites;
mod toml;
mod validated;


pub use cli::{Cli, Command, PostbackKindArg, ScheduleBlastArgs};
pub use error::{ConfigError, field};
pub use sites::{SiteDirectory, SiteInformation};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
