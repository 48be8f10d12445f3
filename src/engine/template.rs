use crate::engine::iter::MatchSpans;
use memchr::memchr;

/// Expand a replacement template against one match, appending to `out`.
///
/// The template is scanned left to right for `\` followed by a decimal
/// digit. `\0` is the whole match and `\1`..`\9` are capture groups; an
/// unmatched group expands to nothing. Two deliberately different fallback
/// branches:
/// - `\d` where `d` is not a group of the pattern is consumed and produces
///   no output;
/// - `\` not followed by a digit (including a trailing lone `\`) is copied
///   through verbatim.
pub fn expand(template: &[u8], m: &MatchSpans, text: &[u8], out: &mut Vec<u8>) {
	let mut rest = template;

	while let Some(at) = next_backreference(rest) {
		out.extend_from_slice(&rest[..at]);

		let digit = (rest[at + 1] - b'0') as usize;
		if digit < m.group_count()
			&& let Some((start, end)) = m.group(digit)
		{
			out.extend_from_slice(&text[start..end]);
		}
		// Out-of-range digit: the two-byte sequence is dropped.

		rest = &rest[at + 2..];
	}

	out.extend_from_slice(rest);
}

/// Offset of the next `\` that is immediately followed by an ASCII digit,
/// skipping backslashes that are not (those pass through verbatim).
fn next_backreference(template: &[u8]) -> Option<usize> {
	let mut from = 0;
	while let Some(i) = memchr(b'\\', &template[from..]) {
		let at = from + i;
		match template.get(at + 1) {
			Some(b) if b.is_ascii_digit() => return Some(at),
			_ => from = at + 1,
		}
	}
	None
}
