use unicode_normalization::UnicodeNormalization;

const STOPWORDS: [&str; 6] = ["fc", "cf", "club", "the", "team", "deportivo"];

/// Canonical form of a team name used for cross-source comparison.
///
/// Diacritics are decomposed away, anything that is not an ASCII letter
/// becomes a separator, and club-type filler words are dropped.
pub fn normalize_team_name(name: &str) -> String {
    let ascii: String = name
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| c.to_ascii_lowercase())
        .map(|c| if c.is_ascii_lowercase() { c } else { ' ' })
        .collect();

    ascii
        .split_whitespace()
        .filter(|token| !STOPWORDS.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}
