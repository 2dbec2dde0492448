//! String similarity scores on a 0-100 scale.

use serde::Deserialize;

/// Scoring used by the name matcher to tolerate spelling drift.
pub trait SimilarityStrategy {
    /// Similarity of the two whole strings.
    fn ratio(&self, a: &str, b: &str) -> f64;

    /// Best [`ratio`](Self::ratio) of the shorter string against any
    /// same-length slice of the longer one. Slices running off either edge
    /// of the longer string are scored too.
    fn partial_ratio(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        if a.is_empty() || b.is_empty() {
            return if a.is_empty() && b.is_empty() { 100.0 } else { 0.0 };
        }

        let best = best_window(self, &a, &b);
        if a.len() == b.len() {
            best.max(best_window(self, &b, &a))
        } else {
            best
        }
    }
}

fn best_window<S: SimilarityStrategy + ?Sized>(strategy: &S, a: &[char], b: &[char]) -> f64 {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let needle: String = short.iter().collect();
    let (m, n) = (short.len(), long.len());

    let mut windows: Vec<&[char]> = Vec::with_capacity(n + m);
    for end in 1..m {
        windows.push(&long[..end]);
    }
    for start in 0..=n - m {
        windows.push(&long[start..start + m]);
    }
    for start in n - m + 1..n {
        windows.push(&long[start..]);
    }

    let mut best = 0.0_f64;
    for window in windows {
        let hay: String = window.iter().collect();
        best = best.max(strategy.ratio(&needle, &hay));
        if best >= 100.0 {
            break;
        }
    }
    best
}

/// Indel similarity: `2 * LCS / (len_a + len_b)`, the classic fuzzy "ratio".
#[derive(Debug, Default, Clone, Copy)]
pub struct IndelSimilarity;

impl SimilarityStrategy for IndelSimilarity {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let total = a.len() + b.len();
        if total == 0 {
            return 100.0;
        }
        100.0 * (2 * lcs_len(&a, &b)) as f64 / total as f64
    }
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diag = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb { diag + 1 } else { above.max(row[j]) };
            diag = above;
        }
    }
    row[b.len()]
}

/// Normalized Levenshtein similarity, backed by `strsim`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LevenshteinSimilarity;

impl SimilarityStrategy for LevenshteinSimilarity {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        strsim::normalized_levenshtein(a, b) * 100.0
    }
}

/// Strategy selected in the configuration file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityKind {
    #[default]
    Indel,
    Levenshtein,
}

impl SimilarityStrategy for SimilarityKind {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        match self {
            SimilarityKind::Indel => IndelSimilarity.ratio(a, b),
            SimilarityKind::Levenshtein => LevenshteinSimilarity.ratio(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn indel_ratio_scores() {
        let s = IndelSimilarity;
        assert!(approx(s.ratio("arsenal", "arsenal"), 100.0));
        assert!(approx(s.ratio("", ""), 100.0));
        assert!(approx(s.ratio("abc", ""), 0.0));
        assert!(approx(s.ratio("abc", "xyz"), 0.0));
        // lcs("kitten", "sitting") = 4 ("ittn") -> 8 / 13
        assert!(approx(s.ratio("kitten", "sitting"), 800.0 / 13.0));
        assert!(approx(s.ratio("tottnhm", "tottenham"), 87.5));
    }

    #[test]
    fn indel_partial_ratio_finds_embedded_name() {
        let s = IndelSimilarity;
        assert!(approx(s.partial_ratio("inter", "internazionale"), 100.0));
        assert!(approx(s.partial_ratio("internazionale", "inter"), 100.0));
        assert!(s.partial_ratio("wolves", "wolverhampton wanderers") >= 80.0);
        assert!(s.partial_ratio("real madrid", "real sociedad") < 80.0);
        assert!(approx(s.partial_ratio("", "abc"), 0.0));
    }

    #[test]
    fn partial_ratio_considers_edge_fragments() {
        let s = IndelSimilarity;
        // "xab" only overlaps "ab" at the start of the longer string
        assert!(approx(s.partial_ratio("xab", "abyyyy"), 80.0));
    }

    #[test]
    fn levenshtein_strategy_is_pluggable() {
        let s = LevenshteinSimilarity;
        assert!(approx(s.ratio("arsenal", "arsenal"), 100.0));
        assert!(approx(s.ratio("kitten", "sitting"), (1.0 - 3.0 / 7.0) * 100.0));
        assert!(approx(s.partial_ratio("city", "manchester city"), 100.0));
    }

    #[test]
    fn configured_kind_delegates() {
        assert!(approx(SimilarityKind::Indel.ratio("kitten", "sitting"), IndelSimilarity.ratio("kitten", "sitting")));
        assert!(approx(
            SimilarityKind::Levenshtein.ratio("kitten", "sitting"),
            LevenshteinSimilarity.ratio("kitten", "sitting")
        ));
        let kind: SimilarityKind = serde_json::from_str("\"levenshtein\"").unwrap();
        assert_eq!(kind, SimilarityKind::Levenshtein);
    }
}
