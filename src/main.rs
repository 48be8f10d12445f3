use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use resub_cli::config::{load_merged_config, user_config_path};
use resub_cli::engine::{PatternCache, replace, select};

#[derive(Parser)]
#[command(name = "resub")]
#[command(
	author,
	version,
	about = "Regex search-and-replace with backreference templates and named presets"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Regex pattern to search for
	#[arg(conflicts_with = "preset")]
	pattern: Option<String>,

	/// Replacement template; \1..\9 refer to capture groups
	#[arg(conflicts_with = "preset", requires = "pattern")]
	template: Option<String>,

	/// Input file (reads stdin when omitted)
	#[arg(short, long, value_name = "FILE")]
	file: Option<PathBuf>,

	/// Match case-insensitively
	#[arg(short, long)]
	ignore_case: bool,

	/// Print each match's expansion on its own line instead of rewriting the input
	#[arg(short, long)]
	select: bool,

	/// Use a named preset from .resub.toml instead of PATTERN and TEMPLATE
	#[arg(short, long, value_name = "NAME")]
	preset: Option<String>,

	/// Create a template .resub.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .resub.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display merged effective presets with source annotations
	Show,
	/// Check all config files and preset patterns for errors
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	// Handle subcommands
	if let Some(command) = cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(),
				ConfigAction::Validate => handle_config_validate(),
			},
		};
	}

	handle_substitute(&cli)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(".resub.toml");

	if config_path.exists() && !force {
		anyhow::bail!(".resub.toml already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created .resub.toml");
	Ok(ExitCode::SUCCESS)
}

fn init_template() -> &'static str {
	r#"# resub presets. Run `resub --preset <name>` to apply one.
# Stops the upward config search at this directory.
root = true

[presets.strip-trailing]
pattern = '[ \t]+$'
template = ''

[presets.swap-assign]
pattern = '(\w+) = (\w+)'
template = '\2 = \1'
"#
}

fn handle_config_show() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let configs =
		resub_cli::config::discover_configs(&cwd).context("Failed to discover config files")?;

	if configs.is_empty() {
		println!("No configuration files found.");
		return Ok(ExitCode::SUCCESS);
	}

	println!("Configuration files (in cascade order):\n");

	for loaded in &configs {
		println!("# Source: {}", loaded.path.display());
		println!("# root: {}", loaded.config.root);
		println!("# presets: {}", loaded.config.presets.len());
		println!();

		for (name, preset) in &loaded.config.presets {
			println!("  [{}]", name);
			println!("    pattern: {}", preset.pattern);
			println!("    template: {}", preset.template);
			if preset.ignore_case {
				println!("    ignore-case: true");
			}
			println!();
		}
	}

	// Show user config path
	if let Ok(user_path) = user_config_path() {
		println!("User config path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	let merged = match load_merged_config(&cwd) {
		Ok(merged) => merged,
		Err(e) => {
			eprintln!("Configuration error: {}", e);
			return Ok(ExitCode::FAILURE);
		}
	};

	if merged.presets.is_empty() {
		println!("No presets found.");
		return Ok(ExitCode::SUCCESS);
	}

	let mut cache = PatternCache::new();
	let mut failures = 0;

	for named in &merged.presets {
		match cache.compile(&named.preset.pattern, named.preset.ignore_case) {
			Ok(_) => println!("  {} ({}) ok", named.name, named.source.display()),
			Err(e) => {
				eprintln!("  {} ({}): {}", named.name, named.source.display(), e);
				failures += 1;
			}
		}
	}

	if failures > 0 {
		eprintln!("{} invalid preset(s)", failures);
		Ok(ExitCode::FAILURE)
	} else {
		println!("All presets are valid.");
		Ok(ExitCode::SUCCESS)
	}
}

fn handle_substitute(cli: &Cli) -> Result<ExitCode> {
	let (pattern, template, ignore_case) = resolve_substitution(cli)?;

	let text = read_input(cli.file.as_deref())?;
	let mut cache = PatternCache::new();

	let stdout = std::io::stdout();
	let mut out = stdout.lock();

	if cli.select {
		let expansions = select(
			&mut cache,
			&pattern,
			template.as_bytes(),
			&text,
			ignore_case,
		)
		.with_context(|| format!("Substitution failed for pattern: {}", pattern))?;

		for expansion in expansions {
			out.write_all(&expansion).context("Failed to write output")?;
			out.write_all(b"\n").context("Failed to write output")?;
		}
	} else {
		let rewritten = replace(
			&mut cache,
			&pattern,
			template.as_bytes(),
			&text,
			ignore_case,
		)
		.with_context(|| format!("Substitution failed for pattern: {}", pattern))?;

		out.write_all(&rewritten).context("Failed to write output")?;
	}

	Ok(ExitCode::SUCCESS)
}

/// Determine the pattern, template, and case flag from either a named
/// preset or the positional arguments.
fn resolve_substitution(cli: &Cli) -> Result<(String, String, bool)> {
	if let Some(ref name) = cli.preset {
		let cwd = std::env::current_dir().context("Failed to get current directory")?;
		let merged = load_merged_config(&cwd).context("Failed to load configuration")?;

		let named = merged
			.find_preset(name)
			.ok_or_else(|| resub_cli::ResubError::PresetNotFound { name: name.clone() })?;

		return Ok((
			named.preset.pattern.clone(),
			named.preset.template.clone(),
			cli.ignore_case || named.preset.ignore_case,
		));
	}

	let pattern = cli
		.pattern
		.clone()
		.ok_or_else(|| anyhow::anyhow!("PATTERN is required unless --preset is given"))?;
	let template = cli
		.template
		.clone()
		.ok_or_else(|| anyhow::anyhow!("TEMPLATE is required unless --preset is given"))?;

	Ok((pattern, template, cli.ignore_case))
}

/// Read the whole input as bytes, from a file or stdin.
fn read_input(file: Option<&std::path::Path>) -> Result<Vec<u8>> {
	match file {
		Some(path) => std::fs::read(path)
			.with_context(|| format!("Failed to read input file: {}", path.display())),
		None => {
			let mut buf = Vec::new();
			std::io::stdin()
				.read_to_end(&mut buf)
				.context("Failed to read stdin")?;
			Ok(buf)
		}
	}
}
