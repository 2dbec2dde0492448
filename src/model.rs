// Core structs: MatchRecord, MergedMatch, per-component errors
use chrono::{DateTime, Utc};

/// Fields only some sources provide. The primary source's extras end up in the report.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SourceExtras {
    #[default]
    None,
    OneFootball {
        match_id: String,
        home_logo: String,
        away_logo: String,
        home_score: String,
        away_score: String,
    },
    AllFootball {
        home_logo: String,
        away_logo: String,
        home_score: String,
        away_score: String,
    },
}

impl SourceExtras {
    pub fn match_id(&self) -> Option<&str> {
        match self {
            SourceExtras::OneFootball { match_id, .. } => Some(match_id.as_str()),
            _ => None,
        }
    }

    pub fn logos(&self) -> Option<(&str, &str)> {
        match self {
            SourceExtras::OneFootball { home_logo, away_logo, .. }
            | SourceExtras::AllFootball { home_logo, away_logo, .. } => {
                Some((home_logo.as_str(), away_logo.as_str()))
            }
            SourceExtras::None => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub home: String,
    pub away: String,
    pub competition: String,
    pub kickoff: Option<DateTime<Utc>>,
    pub channels: Vec<String>,
    pub extras: SourceExtras,
}

impl MatchRecord {
    pub fn new(home: impl Into<String>, away: impl Into<String>, competition: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            competition: competition.into(),
            kickoff: None,
            channels: Vec::new(),
            extras: SourceExtras::None,
        }
    }

    pub fn with_kickoff(mut self, kickoff: DateTime<Utc>) -> Self {
        self.kickoff = Some(kickoff);
        self
    }

    pub fn with_channels<I, S>(mut self, channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.channels = channels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_extras(mut self, extras: SourceExtras) -> Self {
        self.extras = extras;
        self
    }
}

/// A primary-source fixture with its channel list resolved across all sources.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedMatch {
    pub home: String,
    pub away: String,
    pub competition: String,
    pub kickoff: DateTime<Utc>,
    pub channels: Vec<String>,
    pub extras: SourceExtras,
}

#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl ScrapeRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("http error: {0}")]
    HttpError(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected status {0}")]
    InvalidResponse(u16),
}

impl From<reqwest::Error> for ScraperError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ScraperError::Timeout
        } else {
            ScraperError::HttpError(e.to_string())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("embedded payload not found: {0}")]
    MissingPayload(&'static str),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid kickoff {value:?}: {reason}")]
    InvalidKickoff { value: String, reason: String },
    #[error("selector error: {0}")]
    HtmlParseError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("fixture {home} vs {away} has no kickoff time")]
    MissingKickoff { home: String, away: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}
