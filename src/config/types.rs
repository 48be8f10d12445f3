use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level configuration from a `.resub.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// If true, stop the directory cascade here and jump directly to
	/// ~/.resub.toml.
	#[serde(default)]
	pub root: bool,

	/// Named substitution presets, looked up by `--preset <name>`.
	#[serde(default)]
	pub presets: BTreeMap<String, Preset>,
}

/// A named substitution: a pattern plus a backreference template.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Preset {
	/// Regex pattern to search for.
	pub pattern: String,

	/// Replacement template; `\1`..`\9` refer to capture groups.
	pub template: String,

	/// Match case-insensitively.
	#[serde(default)]
	pub ignore_case: bool,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Merged configuration from multiple config files in the cascade.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
	/// All presets from all configs, in cascade order. The first occurrence
	/// of a name wins on lookup.
	pub presets: Vec<NamedPreset>,
}

/// A preset with its name and source config path for debugging/display.
#[derive(Debug, Clone)]
pub struct NamedPreset {
	/// The preset's name within its config file.
	pub name: String,

	/// The preset itself.
	pub preset: Preset,

	/// The config file this preset came from.
	pub source: PathBuf,
}

impl MergedConfig {
	/// Look up a preset by name; the most specific definition wins.
	pub fn find_preset(&self, name: &str) -> Option<&NamedPreset> {
		self.presets.iter().find(|p| p.name == name)
	}
}
