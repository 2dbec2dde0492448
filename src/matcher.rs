use crate::normalizer::normalize_team_name;
use crate::similarity::{IndelSimilarity, SimilarityStrategy};
use std::collections::HashSet;

/// Minimum fuzzy score (0-100) for two names to count as the same team.
pub const FUZZY_THRESHOLD: f64 = 80.0;

/// Best-effort decision whether two team names from different sources
/// refer to the same club.
#[derive(Debug, Default, Clone)]
pub struct NameMatcher<S = IndelSimilarity> {
    similarity: S,
}

#[cfg(test)]
impl NameMatcher<IndelSimilarity> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: SimilarityStrategy> NameMatcher<S> {
    pub fn with_similarity(similarity: S) -> Self {
        Self { similarity }
    }

    pub fn names_equivalent(&self, a: &str, b: &str) -> bool {
        let a = normalize_team_name(a);
        let b = normalize_team_name(b);
        if a.is_empty() || b.is_empty() {
            return false;
        }

        let tokens: HashSet<&str> = a.split(' ').collect();
        if b.split(' ').any(|t| tokens.contains(t)) {
            return true;
        }

        if self.similarity.ratio(&a, &b) >= FUZZY_THRESHOLD
            || self.similarity.partial_ratio(&a, &b) >= FUZZY_THRESHOLD
        {
            return true;
        }

        a.contains(&b) || b.contains(&a)
    }

    /// Home is compared with home and away with away; swapped fixtures do not match.
    pub fn teams_match(&self, home1: &str, away1: &str, home2: &str, away2: &str) -> bool {
        self.names_equivalent(home1, home2) && self.names_equivalent(away1, away2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::LevenshteinSimilarity;

    #[test]
    fn known_equivalent_pairs() {
        let m = NameMatcher::new();
        let pairs = [
            ("Manchester United FC", "Manchester United"),
            ("Wolverhampton Wanderers", "Wolves"),
            ("Inter", "Internazionale"),
            ("Bayern München", "FC Bayern Munich"),
            ("Atlético Madrid", "Atletico de Madrid"),
            ("Tottenham Hotspur", "Tottenham"),
            ("Everton", "Evertonn"),
            ("Arsenal", "Arsenal FC"),
        ];
        for (a, b) in pairs {
            assert!(m.names_equivalent(a, b), "{a} should match {b}");
            assert!(m.names_equivalent(b, a), "{b} should match {a}");
        }
    }

    #[test]
    fn known_distinct_pairs() {
        let m = NameMatcher::new();
        let pairs = [
            ("Arsenal", "Chelsea"),
            ("Liverpool", "Everton"),
            ("Brentford", "Fulham"),
            ("Juventus", "Napoli"),
            ("Barcelona", "Sevilla"),
            ("Celtic", "Rangers"),
            ("Newcastle United", "Nottingham Forest"),
            ("Leeds", "Leicester"),
            ("Aston Villa", "Villarreal"),
        ];
        for (a, b) in pairs {
            assert!(!m.names_equivalent(a, b), "{a} should not match {b}");
        }
    }

    #[test]
    fn shared_token_is_enough() {
        let m = NameMatcher::new();
        // Any common token counts, so clubs sharing a city or prefix collide.
        assert!(m.names_equivalent("Real Madrid", "Real Sociedad"));
        assert!(m.names_equivalent("Manchester City", "Manchester United"));
        assert!(m.names_equivalent("Arsenal", "Arsenal Women"));
    }

    #[test]
    fn abbreviations_without_overlap_do_not_match() {
        let m = NameMatcher::new();
        // "man utd" shares no token with "manchester united" and scores below the threshold.
        assert!(!m.names_equivalent("Manchester United FC", "Man Utd"));
        assert!(!m.names_equivalent("PSG", "Paris Saint-Germain"));
    }

    #[test]
    fn empty_names_never_match() {
        let m = NameMatcher::new();
        assert!(!m.names_equivalent("", ""));
        assert!(!m.names_equivalent("FC", "FC"));
        assert!(!m.names_equivalent("Arsenal", ""));
        assert!(!m.names_equivalent("", "Arsenal"));
    }

    #[test]
    fn teams_match_is_directional() {
        let m = NameMatcher::new();
        assert!(m.teams_match("Arsenal", "Chelsea", "Arsenal FC", "Chelsea FC"));
        assert!(!m.teams_match("Arsenal", "Chelsea", "Chelsea", "Arsenal"));
        assert!(!m.teams_match("Arsenal", "Chelsea", "Arsenal", "Fulham"));
    }

    #[test]
    fn similarity_strategy_can_be_swapped() {
        let m = NameMatcher::with_similarity(LevenshteinSimilarity);
        assert!(m.names_equivalent("Everton", "Evertonn"));
        assert!(!m.names_equivalent("Arsenal", "Chelsea"));
    }
}
