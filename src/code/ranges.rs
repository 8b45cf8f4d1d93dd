//! Line range lists such as `1,3-5`.

use rustc_hash::FxHashSet;

/// Expand a comma-separated range list into line numbers.
///
/// Tokens are either a single number (`7`) or an inclusive run
/// (`3-5`). Numbers are emitted in token order, runs in ascending order.
/// Tokens that do not parse are skipped, as are runs whose start is
/// greater than their end. No bounds checking happens here: `0` or a line
/// past the end of the snippet passes through untouched.
///
/// # Examples
///
/// ```
/// use folio::code::parse_ranges;
/// assert_eq!(parse_ranges(Some("1,3-5")), vec![1, 3, 4, 5]);
/// assert!(parse_ranges(None).is_empty());
/// ```
pub fn parse_ranges(raw: Option<&str>) -> Vec<u32> {
    raw.map(runs)
        .into_iter()
        .flatten()
        .flat_map(|(start, end)| start..=end)
        .collect()
}

/// Inclusive `(start, end)` runs of a range list, in token order.
fn runs(raw: &str) -> impl Iterator<Item = (u32, u32)> + '_ {
    raw.split(',').map(str::trim).filter_map(|token| match token.split_once('-') {
        Some((start, end)) => {
            let start = start.trim().parse::<u32>().ok()?;
            let end = end.trim().parse::<u32>().ok()?;
            Some((start, end))
        }
        None => token.parse::<u32>().ok().map(|line| (line, line)),
    })
}

/// Set of 1-based line numbers to emphasize.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet(FxHashSet<u32>);

impl HighlightSet {
    /// Build from a range list, keeping only lines in `1..=line_count`.
    ///
    /// Runs are cut to the snippet before they are expanded, so a run such
    /// as `1-4000000000` costs no more than the snippet has lines.
    pub fn clamped(raw: Option<&str>, line_count: u32) -> Self {
        let lines = raw
            .map(runs)
            .into_iter()
            .flatten()
            .flat_map(|(start, end)| start.max(1)..=end.min(line_count))
            .collect();
        Self(lines)
    }

    pub fn contains(&self, line: u32) -> bool {
        self.0.contains(&line)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Line numbers in ascending order.
    pub fn sorted(&self) -> Vec<u32> {
        let mut lines: Vec<_> = self.0.iter().copied().collect();
        lines.sort_unstable();
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_set(lines: Vec<u32>) -> FxHashSet<u32> {
        lines.into_iter().collect()
    }

    #[test]
    fn test_mixed_tokens() {
        assert_eq!(as_set(parse_ranges(Some("1,3-5"))), as_set(vec![1, 3, 4, 5]));
    }

    #[test]
    fn test_empty_and_missing() {
        assert!(parse_ranges(Some("")).is_empty());
        assert!(parse_ranges(None).is_empty());
    }

    #[test]
    fn test_single_element_run() {
        assert_eq!(parse_ranges(Some("2-2")), vec![2]);
    }

    #[test]
    fn test_emission_order_follows_tokens() {
        assert_eq!(parse_ranges(Some("9,1-3,2")), vec![9, 1, 2, 3, 2]);
    }

    #[test]
    fn test_whitespace_is_tolerated() {
        assert_eq!(parse_ranges(Some(" 1 , 4 - 6 ")), vec![1, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_tokens_skipped() {
        assert_eq!(parse_ranges(Some("a,2,x-4,5-y,,7")), vec![2, 7]);
        assert!(parse_ranges(Some("-3")).is_empty());
    }

    #[test]
    fn test_reversed_run_emits_nothing() {
        assert_eq!(parse_ranges(Some("5-3,8")), vec![8]);
    }

    #[test]
    fn test_out_of_range_passes_through() {
        assert_eq!(parse_ranges(Some("0,1000")), vec![0, 1000]);
    }

    #[test]
    fn test_highlight_set() {
        let set = HighlightSet::clamped(Some("0,4,1-2,4"), 10);
        assert_eq!(set.len(), 3);
        assert!(set.contains(1));
        assert!(set.contains(4));
        assert!(!set.contains(0));
        assert!(!set.contains(3));
        assert_eq!(set.sorted(), vec![1, 2, 4]);
        assert!(HighlightSet::clamped(None, 10).is_empty());
    }

    #[test]
    fn test_highlight_set_clamped_to_snippet() {
        let set = HighlightSet::clamped(Some("0-2,5,3-4000000000"), 4);
        assert_eq!(set.sorted(), vec![1, 2, 3, 4]);

        let set = HighlightSet::clamped(Some("1-4294967295"), 1);
        assert_eq!(set.sorted(), vec![1]);

        assert!(HighlightSet::clamped(Some("2-3"), 0).is_empty());
        assert!(HighlightSet::clamped(Some("5-3"), 10).is_empty());
    }
}
