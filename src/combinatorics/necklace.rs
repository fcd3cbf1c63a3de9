//! Rotation classes of three-edge tile patterns
//!
//! A tile's three labelled edges read the same after turning the tile by a
//! third, so the game only needs one tile per cyclic rotation class. Each
//! class is represented by its lexicographically smallest rotation.

use crate::io::error::{Result, TileError, invalid_pattern};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Number of labelled edges on a tile
pub const PATTERN_ARITY: usize = 3;

/// Symbol identifying the colour and ring level of one tile edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeLabel(pub char);

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<char> for EdgeLabel {
    fn from(symbol: char) -> Self {
        Self(symbol)
    }
}

/// Ordered edge labels of one tile, in fixed cyclic order
///
/// Ordering compares labels left to right, matching string order of the
/// pattern's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(pub [EdgeLabel; PATTERN_ARITY]);

impl Pattern {
    /// Build a pattern from three labels
    pub const fn new(first: EdgeLabel, second: EdgeLabel, third: EdgeLabel) -> Self {
        Self([first, second, third])
    }

    /// The three labels in cyclic order
    pub const fn labels(&self) -> [EdgeLabel; PATTERN_ARITY] {
        self.0
    }

    /// Rotate the labels `steps` places to the left
    #[must_use]
    pub fn rotated(&self, steps: usize) -> Self {
        let mut labels = self.0;
        labels.rotate_left(steps % PATTERN_ARITY);
        Self(labels)
    }

    /// All cyclic rotations, starting with the pattern itself
    pub fn rotations(&self) -> [Self; PATTERN_ARITY] {
        [self.rotated(0), self.rotated(1), self.rotated(2)]
    }

    /// Smallest rotation of this pattern
    ///
    /// Taking each length-3 window of the doubled sequence enumerates the
    /// rotations; the minimum is the class representative.
    #[must_use]
    pub fn canonical(&self) -> Self {
        let [a, b, c] = self.0;
        let doubled = [a, b, c, a, b, c];
        doubled
            .windows(PATTERN_ARITY)
            .take(PATTERN_ARITY)
            .filter_map(|window| <[EdgeLabel; PATTERN_ARITY]>::try_from(window).ok())
            .map(Self)
            .min()
            .unwrap_or(*self)
    }

    /// Check whether this pattern is its own class representative
    pub fn is_canonical(&self) -> bool {
        self.canonical() == *self
    }

    /// Check whether two patterns belong to the same rotation class
    pub fn is_rotation_of(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}{b}{c}")
    }
}

impl FromStr for Pattern {
    type Err = TileError;

    fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
        let symbols: Vec<EdgeLabel> = text.chars().map(EdgeLabel).collect();
        match symbols.as_slice() {
            &[a, b, c] => Ok(Self::new(a, b, c)),
            _ => Err(invalid_pattern(
                &text,
                &format!(
                    "expected {PATTERN_ARITY} edge labels, found {}",
                    symbols.len()
                ),
            )),
        }
    }
}

/// Canonical representative of a pattern's rotation class
pub fn canonicalize(pattern: &Pattern) -> Pattern {
    pattern.canonical()
}

/// Collapse an alphabet string into its distinct labels, sorted
pub fn parse_alphabet(alphabet: &str) -> Vec<EdgeLabel> {
    alphabet
        .chars()
        .map(EdgeLabel)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Every rotation-distinct pattern over `alphabet`, sorted ascending
///
/// Enumerates all `|alphabet|^3` ordered triples and keeps one canonical
/// representative per class. Repeated labels in the input are ignored.
pub fn generate_combinations(alphabet: &[EdgeLabel]) -> Vec<Pattern> {
    let labels: BTreeSet<EdgeLabel> = alphabet.iter().copied().collect();

    let mut combinations = BTreeSet::new();
    for &a in &labels {
        for &b in &labels {
            for &c in &labels {
                combinations.insert(Pattern::new(a, b, c).canonical());
            }
        }
    }
    combinations.into_iter().collect()
}

/// Like [`generate_combinations`] but for callers that need at least one tile
///
/// # Errors
///
/// Returns an error if the alphabet is empty
pub fn generate_combinations_nonempty(alphabet: &[EdgeLabel]) -> Result<Vec<Pattern>> {
    let combinations = generate_combinations(alphabet);
    if combinations.is_empty() {
        return Err(TileError::InvalidAlphabet {
            reason: "at least one edge label is required".to_string(),
        });
    }
    Ok(combinations)
}

/// Number of 3-bead necklaces over `symbols` colours
///
/// Burnside over the rotation group: identity fixes `n^3` triples and each
/// non-trivial turn fixes the `n` uniform ones.
pub const fn necklace_count(symbols: usize) -> usize {
    (symbols * symbols * symbols + 2 * symbols) / 3
}
