use crate::error::{ResubError, Result};
use regex::bytes::{Regex, RegexBuilder};

/// Single-slot cache for the most recently compiled pattern.
///
/// The cache is an explicit value owned by the caller; there is no global
/// state. Callers that share one cache across threads must serialize access
/// externally, or give each worker its own cache.
#[derive(Debug, Default)]
pub struct PatternCache {
	slot: Option<CachedPattern>,
	last_error: Option<String>,
}

#[derive(Debug)]
struct CachedPattern {
	pattern: String,
	ignore_case: bool,
	regex: Regex,
}

impl PatternCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Compile a pattern, reusing the cached form when both the pattern
	/// string and the ignore-case flag match the previous call.
	///
	/// On failure the slot is left empty (no stale compiled form) and the
	/// matcher's diagnostic is retained for [`PatternCache::last_error`].
	/// The returned `Regex` is a cheap handle onto shared compiled state.
	pub fn compile(&mut self, pattern: &str, ignore_case: bool) -> Result<Regex> {
		self.last_error = None;

		if let Some(cached) = &self.slot
			&& cached.pattern == pattern
			&& cached.ignore_case == ignore_case
		{
			return Ok(cached.regex.clone());
		}

		// Drop the previous compiled form before building the new one, so a
		// failed compile never leaves a stale entry behind.
		self.slot = None;

		let regex = RegexBuilder::new(pattern)
			.case_insensitive(ignore_case)
			.dot_matches_new_line(false)
			.build()
			.map_err(|source| {
				self.last_error = Some(source.to_string());
				ResubError::InvalidPattern {
					pattern: pattern.to_string(),
					source,
				}
			})?;

		self.slot = Some(CachedPattern {
			pattern: pattern.to_string(),
			ignore_case,
			regex: regex.clone(),
		});

		Ok(regex)
	}

	/// The diagnostic from the most recent failed compile, if the most
	/// recent call to [`PatternCache::compile`] failed.
	pub fn last_error(&self) -> Option<&str> {
		self.last_error.as_deref()
	}

	/// Whether a compiled pattern is currently cached.
	pub fn is_populated(&self) -> bool {
		self.slot.is_some()
	}
}
