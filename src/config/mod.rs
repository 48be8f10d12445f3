//! Configuration loading and parsing for resub.
//!
//! This module handles:
//! - TOML preset file parsing
//! - Directory cascade discovery
//! - Preset merging and lookup

pub mod cascade;
pub mod parser;
pub mod types;

pub use cascade::{discover_configs, load_merged_config, merge_configs, user_config_path};
pub use parser::{parse_config_file, parse_config_str};
pub use types::{Config, LoadedConfig, MergedConfig, NamedPreset, Preset};
