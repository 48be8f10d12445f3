//! The substitution engine.
//!
//! This module handles:
//! - Compiled-pattern caching ([`PatternCache`])
//! - Iterating matches over a subject text ([`Matches`])
//! - Backreference template expansion ([`expand`])
//! - The two assembly modes, [`replace`] and [`select`]
//!
//! Everything operates on bytes; only the pattern itself is UTF-8 source
//! handed to the matcher.

pub mod cache;
pub mod iter;
pub mod template;

pub use cache::PatternCache;
pub use iter::{MatchSpans, Matches};
pub use template::expand;

use crate::error::Result;

/// Replace every match of `pattern` in `text` with the expanded `template`,
/// returning the fully substituted text.
///
/// Text between matches is carried through verbatim, so zero matches return
/// the input byte-for-byte. A pattern that can match the empty string is
/// safe: the match iteration always advances and every unmatched byte is
/// emitted exactly once.
pub fn replace(
	cache: &mut PatternCache,
	pattern: &str,
	template: &[u8],
	text: &[u8],
	ignore_case: bool,
) -> Result<Vec<u8>> {
	let regex = cache.compile(pattern, ignore_case)?;

	let mut out = Vec::with_capacity(text.len() + template.len());
	let mut prior_end = 0;

	for m in Matches::new(&regex, text) {
		// The gap also carries the byte stepped over after an empty match,
		// since prior_end trails the iterator's cursor in that case.
		out.extend_from_slice(&text[prior_end..m.start()]);
		expand(template, &m, text, &mut out);
		prior_end = m.end();
	}

	out.extend_from_slice(&text[prior_end..]);
	Ok(out)
}

/// Expand `template` once per match of `pattern` in `text`, returning the
/// expansions in match order.
///
/// Unlike [`replace`], no surrounding text is included: each entry is one
/// match's expansion and nothing else. Zero matches yield an empty vector,
/// not an error.
pub fn select(
	cache: &mut PatternCache,
	pattern: &str,
	template: &[u8],
	text: &[u8],
	ignore_case: bool,
) -> Result<Vec<Vec<u8>>> {
	let regex = cache.compile(pattern, ignore_case)?;

	let mut results = Vec::new();
	for m in Matches::new(&regex, text) {
		let mut out = Vec::with_capacity(template.len());
		expand(template, &m, text, &mut out);
		results.push(out);
	}

	Ok(results)
}
