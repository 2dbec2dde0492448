use std::collections::HashSet;
use std::fs;
use tracing::{info, warn};

const WOMEN_MARKERS: [&str; 2] = ["women", "nwsl"];
const YOUTH_MARKERS: [&str; 9] = [
    "u18", "u19", "u20", "u21", "u23", "youth", "reserve", "reserves", "academy",
];

/// Drops primary-source fixtures from excluded competitions.
#[derive(Debug, Default, Clone)]
pub struct CompetitionFilter {
    banned: HashSet<String>,
}

impl CompetitionFilter {
    /// `banned` holds competition names; they are compared case-insensitively.
    pub fn new<I, S>(banned: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let banned = banned
            .into_iter()
            .map(|name| name.as_ref().trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();
        Self { banned }
    }

    /// Reads one tournament per line. A missing or unreadable file gives an empty list.
    pub fn from_file(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => {
                let filter = Self::new(content.lines());
                info!("Loaded {} banned tournaments from {}", filter.banned.len(), path);
                filter
            }
            Err(e) => {
                warn!("{} not readable ({}), continuing with empty ban list", path, e);
                Self::default()
            }
        }
    }

    pub fn banned_count(&self) -> usize {
        self.banned.len()
    }

    pub fn is_banned(&self, home: &str, away: &str, competition: &str) -> bool {
        let comp = competition.to_lowercase();

        if self.banned.contains(&comp) {
            return true;
        }
        if WOMEN_MARKERS.iter().any(|m| comp.contains(m)) {
            return true;
        }
        if YOUTH_MARKERS.iter().any(|m| comp.contains(m)) {
            return true;
        }
        home.to_lowercase().contains("women") || away.to_lowercase().contains("women")
    }
}
