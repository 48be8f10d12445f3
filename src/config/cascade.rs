use crate::config::parser::parse_config_file;
use crate::config::types::{LoadedConfig, MergedConfig, NamedPreset};
use crate::error::{ResubError, Result};
use std::path::{Path, PathBuf};

/// Discover and load all config files in the cascade.
///
/// The cascade order is:
/// 1. Start from `start_dir` and look for `.resub.toml`
/// 2. Continue up the directory tree, stopping after a config with
///    `root = true`
/// 3. Finally, check ~/.resub.toml
///
/// Returns configs in cascade order (most specific first).
pub fn discover_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let mut configs = Vec::new();
	let mut current_dir = start_dir.to_path_buf();

	// Walk up the directory tree
	loop {
		let config_path = current_dir.join(".resub.toml");

		if config_path.exists() {
			let config = parse_config_file(&config_path)?;
			let is_root = config.root;

			configs.push(LoadedConfig {
				config,
				path: config_path,
			});

			if is_root {
				break;
			}
		}

		// Move to parent directory
		if let Some(parent) = current_dir.parent() {
			current_dir = parent.to_path_buf();
		} else {
			break;
		}
	}

	// User config comes last so project presets shadow it
	if let Some(user_config) = load_user_config()? {
		configs.push(user_config);
	}

	Ok(configs)
}

/// Load the user's ~/.resub.toml if it exists.
fn load_user_config() -> Result<Option<LoadedConfig>> {
	let home_dir = dirs::home_dir().ok_or(ResubError::HomeDirectoryNotFound)?;
	let user_config_path = home_dir.join(".resub.toml");

	if user_config_path.exists() {
		let config = parse_config_file(&user_config_path)?;
		Ok(Some(LoadedConfig {
			config,
			path: user_config_path,
		}))
	} else {
		Ok(None)
	}
}

/// Merge multiple configs into a single effective config.
///
/// Presets are collected in cascade order; the first definition of a name
/// wins on lookup.
pub fn merge_configs(configs: &[LoadedConfig]) -> MergedConfig {
	let mut merged = MergedConfig::default();

	for loaded in configs {
		for (name, preset) in &loaded.config.presets {
			merged.presets.push(NamedPreset {
				name: name.clone(),
				preset: preset.clone(),
				source: loaded.path.clone(),
			});
		}
	}

	merged
}

/// Convenience function to discover, load, and merge configs from a directory.
pub fn load_merged_config(start_dir: &Path) -> Result<MergedConfig> {
	let configs = discover_configs(start_dir)?;
	Ok(merge_configs(&configs))
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(ResubError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(".resub.toml"))
}
