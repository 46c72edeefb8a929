// src/models/digit_model.rs
// Digit -> segment table and the cell patterns derived from it

use std::collections::HashSet;

use super::geometry::{GridCell, Segment};

/// Standard seven-segment encoding.
pub fn digit_segments(digit: u8) -> &'static [Segment] {
    use Segment::*;
    match digit {
        0 => &[A, B, C, D, E, F],
        1 => &[B, C],
        2 => &[A, B, G, E, D],
        3 => &[A, B, G, C, D],
        4 => &[F, G, B, C],
        5 => &[A, F, G, C, D],
        6 => &[A, F, G, E, C, D],
        7 => &[A, B, C],
        8 => &[A, B, C, D, E, F, G],
        9 => &[A, B, C, D, F, G],
        _ => &[],
    }
}

/// Cell patterns for the ten digits, built once at startup.
#[derive(Debug, Clone)]
pub struct DigitPatterns {
    patterns: [Vec<GridCell>; 10],
}

impl Default for DigitPatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitPatterns {
    pub fn new() -> Self {
        Self {
            patterns: std::array::from_fn(|digit| build_pattern(digit as u8)),
        }
    }

    /// Pattern for a digit character; anything else has no cells.
    pub fn pattern(&self, digit: char) -> &[GridCell] {
        digit
            .to_digit(10)
            .map(|d| self.patterns[d as usize].as_slice())
            .unwrap_or(&[])
    }

    pub fn pattern_set(&self, digit: char) -> HashSet<GridCell> {
        self.pattern(digit).iter().copied().collect()
    }
}

// union of the segment cells, first occurrence wins
fn build_pattern(digit: u8) -> Vec<GridCell> {
    let mut seen = HashSet::new();
    digit_segments(digit)
        .iter()
        .flat_map(|segment| segment.cells())
        .filter(|cell| seen.insert(*cell))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(list: &[(usize, usize)]) -> HashSet<GridCell> {
        list.iter().map(|&(r, c)| GridCell::new(r, c)).collect()
    }

    const A: [(usize, usize); 3] = [(0, 1), (0, 2), (0, 3)];
    const B: [(usize, usize); 3] = [(1, 4), (2, 4), (3, 4)];
    const C: [(usize, usize); 3] = [(5, 4), (6, 4), (7, 4)];
    const D: [(usize, usize); 3] = [(8, 1), (8, 2), (8, 3)];
    const E: [(usize, usize); 3] = [(5, 0), (6, 0), (7, 0)];
    const F: [(usize, usize); 3] = [(1, 0), (2, 0), (3, 0)];
    const G: [(usize, usize); 3] = [(4, 1), (4, 2), (4, 3)];

    fn expected(parts: &[[(usize, usize); 3]]) -> HashSet<GridCell> {
        parts.iter().flat_map(|p| cells(p)).collect()
    }

    #[test]
    fn test_digit_patterns_match_fixtures() {
        let fixtures = vec![
            ('0', expected(&[A, B, C, D, E, F])),
            ('1', expected(&[B, C])),
            ('2', expected(&[A, B, G, E, D])),
            ('3', expected(&[A, B, G, C, D])),
            ('4', expected(&[F, G, B, C])),
            ('5', expected(&[A, F, G, C, D])),
            ('6', expected(&[A, F, G, E, C, D])),
            ('7', expected(&[A, B, C])),
            ('8', expected(&[A, B, C, D, E, F, G])),
            ('9', expected(&[A, B, C, D, F, G])),
        ];

        let patterns = DigitPatterns::new();
        for (digit, expected) in fixtures {
            let pattern = patterns.pattern(digit);
            let unique: HashSet<GridCell> = pattern.iter().copied().collect();
            assert_eq!(unique.len(), pattern.len(), "duplicates in {}", digit);
            assert_eq!(unique, expected, "Failed for digit {}", digit);
        }
    }

    #[test]
    fn test_pattern_sizes() {
        let patterns = DigitPatterns::new();
        let sizes: Vec<usize> = ('0'..='9').map(|d| patterns.pattern(d).len()).collect();
        assert_eq!(sizes, vec![18, 6, 15, 15, 12, 15, 18, 9, 21, 18]);
    }

    #[test]
    fn test_unmapped_character_is_empty() {
        let patterns = DigitPatterns::new();
        assert!(patterns.pattern(' ').is_empty());
        assert!(patterns.pattern('x').is_empty());
        assert!(patterns.pattern_set(':').is_empty());
        assert!(digit_segments(10).is_empty());
    }

    #[test]
    fn test_pattern_keeps_segment_order() {
        let patterns = DigitPatterns::new();
        // '2' lists A, B, G, E, D
        let pattern = patterns.pattern('2');
        assert_eq!(pattern[0], GridCell::new(0, 1));
        assert_eq!(pattern[3], GridCell::new(1, 4));
        assert_eq!(pattern[6], GridCell::new(4, 1));
        assert_eq!(pattern[14], GridCell::new(8, 3));
    }
}
