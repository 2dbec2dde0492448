// DaddyLive: JSON schedule keyed by day, then by sport category
use crate::model::{MatchRecord, ParserError, ScrapeRequest};
use crate::parser::{ParseContext, SourceParser};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static VS_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+vs\.?\s+").expect("vs pattern is valid"));

pub struct DaddyLiveParser {
    url: String,
    referer: String,
}

impl DaddyLiveParser {
    pub fn new(url: impl Into<String>, referer: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            referer: referer.into(),
        }
    }
}

impl SourceParser for DaddyLiveParser {
    fn name(&self) -> &'static str {
        "DaddyLive"
    }

    fn request(&self) -> ScrapeRequest {
        ScrapeRequest::get(&self.url)
            .header("Referer", &self.referer)
            .header("Origin", &self.referer)
    }

    fn parse(&self, body: &str, _ctx: &ParseContext) -> Result<Vec<MatchRecord>, ParserError> {
        let data: Value = serde_json::from_str(body)?;
        let days = data
            .as_object()
            .ok_or(ParserError::MissingPayload("schedule object"))?;

        let mut matches = Vec::new();
        for categories in days.values().filter_map(Value::as_object) {
            for (sport, events) in categories {
                if !sport.to_lowercase().contains("soccer") {
                    continue;
                }
                let Some(events) = events.as_array() else {
                    continue;
                };
                matches.extend(events.iter().filter_map(parse_event));
            }
        }

        Ok(matches)
    }
}

/// `"<competition> : <home> vs <away>"`; events listing only extra streams are dropped.
fn parse_event(event: &Value) -> Option<MatchRecord> {
    let title = event.get("event").and_then(Value::as_str).unwrap_or_default();
    if !title.to_lowercase().contains("vs") {
        return None;
    }
    let (competition, fixture) = title.split_once(':')?;
    let parts: Vec<&str> = VS_SPLIT.split(fixture).collect();
    let [home, away] = parts.as_slice() else {
        return None;
    };

    let mut channels = channel_names(event.get("channels"));
    channels.extend(channel_names(event.get("channels2")));
    if channels.iter().all(|ch| ch.to_lowercase().contains("extra stream")) {
        return None;
    }

    Some(MatchRecord::new(home.trim(), away.trim(), competition.trim()).with_channels(channels))
}

fn channel_names(list: Option<&Value>) -> Vec<String> {
    let entries: Vec<&Value> = match list {
        Some(Value::Array(items)) => items.iter().collect(),
        // object form keyed by index; the entries are the values
        Some(Value::Object(map)) => map.values().collect(),
        _ => return Vec::new(),
    };

    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::Object(obj) => Some(
                obj.get("channel_name")
                    .and_then(Value::as_str)
                    .unwrap_or("Unknown")
                    .to_string(),
            ),
            Value::String(name) => Some(name.clone()),
            _ => None,
        })
        .collect()
}
