use crate::filter::CompetitionFilter;
use crate::matcher::NameMatcher;
use crate::model::{MatchRecord, MergeError, MergedMatch};
use crate::similarity::SimilarityStrategy;
use std::collections::HashSet;
use tracing::{debug, info};

pub const NO_CHANNELS: &str = "Not specified";

/// Joins primary-source fixtures with channel information from auxiliary sources.
pub struct Reconciler<'a, S> {
    filter: &'a CompetitionFilter,
    matcher: &'a NameMatcher<S>,
}

impl<'a, S: SimilarityStrategy> Reconciler<'a, S> {
    pub fn new(filter: &'a CompetitionFilter, matcher: &'a NameMatcher<S>) -> Self {
        Self { filter, matcher }
    }

    /// Auxiliary sources are scanned in the order given. Every primary record
    /// must carry a kickoff; the first one without fails the whole merge.
    pub fn merge(
        &self,
        primary: Vec<MatchRecord>,
        auxiliary: &[Vec<MatchRecord>],
    ) -> Result<Vec<MergedMatch>, MergeError> {
        let mut merged = Vec::with_capacity(primary.len());

        for record in primary {
            if self.filter.is_banned(&record.home, &record.away, &record.competition) {
                debug!("Skipping banned fixture {} vs {} ({})", record.home, record.away, record.competition);
                continue;
            }

            let Some(kickoff) = record.kickoff else {
                return Err(MergeError::MissingKickoff {
                    home: record.home,
                    away: record.away,
                });
            };

            let found = auxiliary
                .iter()
                .flatten()
                .filter(|aux| self.matcher.teams_match(&record.home, &record.away, &aux.home, &aux.away))
                .flat_map(|aux| aux.channels.iter().cloned());
            let channels = resolve_channels(found);

            merged.push(MergedMatch {
                home: record.home,
                away: record.away,
                competition: record.competition,
                kickoff,
                channels,
                extras: record.extras,
            });
        }

        merged.sort_by_key(|m| m.kickoff);
        info!("Final merged matches: {}", merged.len());
        Ok(merged)
    }
}

/// Case-insensitive dedup keeping the first spelling, or the placeholder when nothing is left.
pub fn resolve_channels<I: IntoIterator<Item = String>>(channels: I) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut clean: Vec<String> = channels
        .into_iter()
        .filter(|ch| !ch.is_empty() && seen.insert(ch.to_lowercase()))
        .collect();

    if clean.is_empty() {
        clean.push(NO_CHANNELS.to_string());
    }
    clean
}
