use regex::bytes::{CaptureLocations, Regex};

/// Capture spans for a single match, snapshotted as byte offsets into the
/// subject text. Group 0 is the whole match; other groups may be unmatched.
#[derive(Debug, Clone)]
pub struct MatchSpans {
	start: usize,
	end: usize,
	groups: Vec<Option<(usize, usize)>>,
}

impl MatchSpans {
	/// Start offset of the whole match (group 0).
	pub fn start(&self) -> usize {
		self.start
	}

	/// End offset of the whole match (group 0).
	pub fn end(&self) -> usize {
		self.end
	}

	/// Whether group 0 spans zero bytes.
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// The span of capture group `i`, or `None` if the group did not
	/// participate in the match or `i` is out of range.
	pub fn group(&self, i: usize) -> Option<(usize, usize)> {
		self.groups.get(i).copied().flatten()
	}

	/// Number of capture groups, counting group 0.
	pub fn group_count(&self) -> usize {
		self.groups.len()
	}
}

/// Iterator over successive matches of a compiled pattern in a subject text.
///
/// The cursor never moves backwards: a non-empty match advances it to the
/// match end, and an empty match advances it by exactly one byte (the final
/// empty match at the end of the text is still yielded before iteration
/// stops). Total steps are bounded by the text length plus the match count,
/// so a pattern that matches the empty string everywhere cannot loop.
#[derive(Debug)]
pub struct Matches<'r, 't> {
	regex: &'r Regex,
	text: &'t [u8],
	locs: CaptureLocations,
	pos: usize,
	done: bool,
}

impl<'r, 't> Matches<'r, 't> {
	pub fn new(regex: &'r Regex, text: &'t [u8]) -> Self {
		let locs = regex.capture_locations();
		Matches {
			regex,
			text,
			locs,
			pos: 0,
			done: false,
		}
	}
}

impl Iterator for Matches<'_, '_> {
	type Item = MatchSpans;

	fn next(&mut self) -> Option<MatchSpans> {
		if self.done {
			return None;
		}

		let m = match self
			.regex
			.captures_read_at(&mut self.locs, self.text, self.pos)
		{
			Some(m) => m,
			None => {
				self.done = true;
				return None;
			}
		};

		let groups = (0..self.locs.len()).map(|i| self.locs.get(i)).collect();
		let spans = MatchSpans {
			start: m.start(),
			end: m.end(),
			groups,
		};

		if !spans.is_empty() {
			self.pos = spans.end();
		} else if spans.end() == self.text.len() {
			// Empty match at the end of the text: yield it, then stop.
			self.done = true;
		} else {
			// Empty match elsewhere: step over one byte so the search
			// cannot stall at the same offset.
			self.pos = spans.end() + 1;
		}

		Some(spans)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn compile(pattern: &str) -> Regex {
		Regex::new(pattern).unwrap()
	}

	fn all_spans(pattern: &str, text: &[u8]) -> Vec<(usize, usize)> {
		let regex = compile(pattern);
		Matches::new(&regex, text)
			.map(|m| (m.start(), m.end()))
			.collect()
	}

	#[test]
	fn test_no_match_yields_nothing() {
		assert!(all_spans("z", b"abc").is_empty());
	}

	#[test]
	fn test_successive_nonempty_matches() {
		assert_eq!(all_spans("a", b"a_a_a"), vec![(0, 1), (2, 3), (4, 5)]);
	}

	#[test]
	fn test_adjacent_matches_do_not_overlap() {
		assert_eq!(all_spans("aa", b"aaaa"), vec![(0, 2), (2, 4)]);
	}

	#[test]
	fn test_empty_matches_advance_one_byte() {
		// "a*" matches empty at every position of "bc", plus once at the end.
		assert_eq!(all_spans("a*", b"bc"), vec![(0, 0), (1, 1), (2, 2)]);
	}

	#[test]
	fn test_empty_match_at_end_is_yielded_once() {
		assert_eq!(all_spans("b*", b"ab"), vec![(0, 0), (1, 2), (2, 2)]);
	}

	#[test]
	fn test_empty_pattern_on_empty_text() {
		assert_eq!(all_spans("", b""), vec![(0, 0)]);
	}

	#[test]
	fn test_cursor_is_monotonic() {
		let regex = compile("a*");
		let mut prior = 0;
		for m in Matches::new(&regex, b"aabaa") {
			assert!(m.start() >= prior);
			assert!(m.end() >= m.start());
			prior = m.end();
		}
	}

	#[test]
	fn test_group_spans_within_whole_match() {
		let regex = compile("(a)(b+)");
		let text = b"xx abb yy";
		let spans: Vec<_> = Matches::new(&regex, text).collect();
		assert_eq!(spans.len(), 1);

		let m = &spans[0];
		assert_eq!(m.group_count(), 3);
		assert_eq!(m.group(0), Some((3, 6)));
		assert_eq!(m.group(1), Some((3, 4)));
		assert_eq!(m.group(2), Some((4, 6)));
	}

	#[test]
	fn test_unmatched_optional_group_is_none() {
		let regex = compile("a(b)?c");
		let spans: Vec<_> = Matches::new(&regex, b"ac").collect();
		assert_eq!(spans.len(), 1);
		assert_eq!(spans[0].group(1), None);
	}

	#[test]
	fn test_out_of_range_group_is_none() {
		let regex = compile("a");
		let spans: Vec<_> = Matches::new(&regex, b"a").collect();
		assert_eq!(spans[0].group(7), None);
	}
}
