// Per-site parsers. Each turns one raw page or API response into MatchRecords.
pub mod allfootball;
pub mod daddylive;
pub mod onefootball;
pub mod wheresthematch;

use crate::model::{MatchRecord, ParserError, ScrapeRequest};
use chrono::{DateTime, Utc};
use scraper::Selector;

pub use allfootball::AllFootballParser;
pub use daddylive::DaddyLiveParser;
pub use onefootball::OneFootballParser;
pub use wheresthematch::WheresTheMatchParser;

/// Run-wide inputs to parsing. Sources listing "today's" fixtures resolve dates against `now`.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext {
    pub now: DateTime<Utc>,
}

impl ParseContext {
    pub fn now() -> Self {
        Self { now: Utc::now() }
    }
}

pub trait SourceParser: Send + Sync {
    fn name(&self) -> &'static str;
    fn request(&self) -> ScrapeRequest;
    fn parse(&self, body: &str, ctx: &ParseContext) -> Result<Vec<MatchRecord>, ParserError>;
}

pub(crate) fn selector(css: &str) -> Result<Selector, ParserError> {
    Selector::parse(css).map_err(|e| ParserError::HtmlParseError(e.to_string()))
}
