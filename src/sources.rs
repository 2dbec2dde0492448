use crate::fetcher::Scraper;
use crate::model::MatchRecord;
use crate::parser::{ParseContext, SourceParser};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Drives one source at a time: fetch, parse, log. Failures yield no records.
pub struct SourceRunner<'a> {
    scraper: &'a dyn Scraper,
    ctx: ParseContext,
    debug_dir: Option<PathBuf>,
}

impl<'a> SourceRunner<'a> {
    pub fn new(scraper: &'a dyn Scraper, ctx: ParseContext) -> Self {
        Self {
            scraper,
            ctx,
            debug_dir: None,
        }
    }

    /// Pages that fail to parse are saved here for inspection.
    pub fn with_debug_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.debug_dir = Some(dir.into());
        self
    }

    pub async fn fetch(&self, source: &dyn SourceParser) -> Vec<MatchRecord> {
        info!("Fetching matches from {}...", source.name());

        let body = match self.scraper.fetch(&source.request()).await {
            Ok(body) => body,
            Err(e) => {
                error!("Error fetching {}: {}", source.name(), e);
                return Vec::new();
            }
        };

        match source.parse(&body, &self.ctx) {
            Ok(records) => {
                info!("{}: {} matches", source.name(), records.len());
                records
            }
            Err(e) => {
                error!("Error parsing {}: {}", source.name(), e);
                if let Some(dir) = &self.debug_dir {
                    save_debug_body(dir, source.name(), &body);
                }
                Vec::new()
            }
        }
    }
}

fn save_debug_body(folder: &Path, source: &str, body: &str) {
    if let Err(e) = fs::create_dir_all(folder) {
        warn!("Failed to create debug folder: {}", e);
        return;
    }
    let filename = folder.join(format!("debug-{}.txt", source.to_lowercase()));
    if let Err(e) = fs::write(&filename, body) {
        warn!("Failed to write debug body: {}", e);
    } else {
        info!("Saved debug body: {}", filename.display());
    }
}
