//! # Peer Reputation Score
//!
//! A peer's reputation is the number of proof-of-work suffixes it can show.
//! This module does not verify the work behind a suffix; it only counts them.
//!
//! ## Invariants
//!
//! - `value()` equals the number of items yielded by `suffixes()`
//! - A score is an immutable snapshot; an empty score has value 0

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Reputation evidence of one peer.
///
/// Implementations must be pure: calling `suffixes()` twice on the same
/// snapshot yields the same sequence.
pub trait Score: Send + Sync + fmt::Debug {
    /// Evidence tokens, in the order the peer presented them.
    fn suffixes(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Reputation value: the number of suffixes.
    fn value(&self) -> u64 {
        self.suffixes().count() as u64
    }
}

/// Owned score snapshot backed by a list of suffix tokens.
///
/// The text form is the suffixes separated by single spaces, which is also
/// what `from_str` accepts (any whitespace separates tokens).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixScore {
    suffixes: Vec<String>,
}

impl SuffixScore {
    /// Create a score from the given suffixes.
    pub fn new(suffixes: Vec<String>) -> Self {
        Self { suffixes }
    }

    /// A score with no evidence (value 0).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of suffixes held.
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    /// Whether the score carries no evidence.
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

impl Score for SuffixScore {
    fn suffixes(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.suffixes.iter().map(String::as_str))
    }

    fn value(&self) -> u64 {
        self.suffixes.len() as u64
    }
}

impl FromIterator<String> for SuffixScore {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromStr for SuffixScore {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.split_whitespace().map(str::to_string).collect())
    }
}

impl fmt::Display for SuffixScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffixes.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Score that only implements `suffixes`, exercising the default `value`.
    #[derive(Debug)]
    struct LazyScore(usize);

    impl Score for LazyScore {
        fn suffixes(&self) -> Box<dyn Iterator<Item = &str> + '_> {
            Box::new(std::iter::repeat("0a1b").take(self.0))
        }
    }

    #[test]
    fn test_empty_score_has_zero_value() {
        let score = SuffixScore::empty();
        assert_eq!(score.value(), 0);
        assert_eq!(score.suffixes().count(), 0);
        assert!(score.is_empty());
    }

    #[test]
    fn test_value_counts_suffixes() {
        let score: SuffixScore = "4f1a 9c2e 0b7d".parse().unwrap();
        assert_eq!(score.value(), 3);
        assert_eq!(
            score.suffixes().collect::<Vec<_>>(),
            vec!["4f1a", "9c2e", "0b7d"]
        );
    }

    #[test]
    fn test_default_value_matches_suffix_count() {
        assert_eq!(LazyScore(0).value(), 0);
        assert_eq!(LazyScore(17).value(), 17);
    }

    #[test]
    fn test_parse_ignores_extra_whitespace() {
        let score: SuffixScore = "  a1 \t b2\n".parse().unwrap();
        assert_eq!(score.value(), 2);
        assert_eq!(score.to_string(), "a1 b2");
    }

    #[test]
    fn test_value_is_stable_across_calls() {
        let score: SuffixScore = (0..20).map(|i| format!("{i:04x}")).collect();
        assert_eq!(score.value(), score.value());
        assert_eq!(score.value(), 20);
    }
}
