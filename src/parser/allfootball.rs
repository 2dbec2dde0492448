// AllFootball: mobile page with the match list embedded in a store snapshot
use crate::model::{MatchRecord, ParserError, ScrapeRequest, SourceExtras};
use crate::parser::{ParseContext, SourceParser};
use crate::utils::{parse_utc, score_text, GMT3};
use serde_json::Value;

const STORE_MARKER: &str = "\"matchListStore\":";
const STORE_END: &str = "}</script>";

pub struct AllFootballParser {
    url: String,
}

impl AllFootballParser {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl SourceParser for AllFootballParser {
    fn name(&self) -> &'static str {
        "AllFootball"
    }

    /// The site sits behind a bot check, so ask like a browser would.
    fn request(&self) -> ScrapeRequest {
        ScrapeRequest::get(&self.url)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header("Accept-Language", "en-US,en;q=0.9")
            .header("Cache-Control", "no-cache")
    }

    /// Keeps only fixtures falling on today's date in UTC+3.
    fn parse(&self, body: &str, ctx: &ParseContext) -> Result<Vec<MatchRecord>, ParserError> {
        let start = body
            .find(STORE_MARKER)
            .ok_or(ParserError::MissingPayload("matchListStore"))?;
        let len = body[start..]
            .find(STORE_END)
            .ok_or(ParserError::MissingPayload("matchListStore"))?;
        let data: Value = serde_json::from_str(&format!("{{{}}}", &body[start..start + len]))?;

        let raw = data
            .pointer("/matchListStore/currentListData")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let today = ctx.now.with_timezone(&GMT3).date_naive();

        let mut matches = Vec::new();
        for item in raw {
            let text = |key: &str| item.get(key).and_then(Value::as_str).unwrap_or_default();
            let time = item.get("time_utc").and_then(Value::as_str).unwrap_or("00:00:00");
            let kickoff = parse_utc(&format!("{} {}", text("date_utc"), time), "%Y-%m-%d %H:%M:%S")?;
            if kickoff.with_timezone(&GMT3).date_naive() != today {
                continue;
            }

            let competition = item
                .get("competition_name")
                .and_then(Value::as_str)
                .unwrap_or("Unknown");
            let extras = SourceExtras::AllFootball {
                home_logo: text("team_A_logo").to_string(),
                away_logo: text("team_B_logo").to_string(),
                home_score: score_text(item.get("fs_A")),
                away_score: score_text(item.get("fs_B")),
            };

            matches.push(
                MatchRecord::new(text("team_A_name"), text("team_B_name"), competition)
                    .with_kickoff(kickoff)
                    .with_extras(extras),
            );
        }

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn page(list: &str) -> String {
        format!(
            r#"<html><script>window.__INITIAL_STATE__={{"userStore":{{"id":1}},"matchListStore":{{"currentListData":{}}}}}</script></html>"#,
            list
        )
    }

    fn ctx() -> ParseContext {
        // 2025-03-15 13:00 in UTC+3
        ParseContext { now: Utc.with_ymd_and_hms(2025, 3, 15, 10, 0, 0).unwrap() }
    }

    #[test]
    fn keeps_todays_fixtures() {
        let body = page(
            r#"[
                {"team_A_name":"Arsenal","team_B_name":"Chelsea","competition_name":"Premier League",
                 "date_utc":"2025-03-15","time_utc":"15:00:00","team_A_logo":"a.png","team_B_logo":"c.png","fs_A":"1","fs_B":0},
                {"team_A_name":"Inter","team_B_name":"Milan","date_utc":"2025-03-15","time_utc":"21:30:00"},
                {"team_A_name":"Ajax","team_B_name":"PSV","date_utc":"2025-03-14","time_utc":"20:00:00"}
            ]"#,
        );
        let out = AllFootballParser::new("https://example.test").parse(&body, &ctx()).unwrap();

        // 21:30 UTC is 00:30 the next day in UTC+3, 20:00 UTC the day before is 23:00
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].home, "Arsenal");
        assert_eq!(out[0].kickoff, Some(Utc.with_ymd_and_hms(2025, 3, 15, 15, 0, 0).unwrap()));
        assert_eq!(out[0].extras.logos(), Some(("a.png", "c.png")));
        assert!(out[0].channels.is_empty());
    }

    #[test]
    fn missing_time_defaults_to_midnight() {
        let body = page(r#"[{"team_A_name":"Celtic","team_B_name":"Rangers","date_utc":"2025-03-15"}]"#);
        let out = AllFootballParser::new("https://example.test").parse(&body, &ctx()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].competition, "Unknown");
        assert_eq!(out[0].kickoff, Some(Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).unwrap()));
    }

    #[test]
    fn bad_date_fails_the_page() {
        let body = page(r#"[{"team_A_name":"Celtic","team_B_name":"Rangers"}]"#);
        let result = AllFootballParser::new("https://example.test").parse(&body, &ctx());
        assert!(matches!(result, Err(ParserError::InvalidKickoff { .. })));
    }

    #[test]
    fn page_without_store() {
        let result = AllFootballParser::new("https://example.test").parse("<html>blocked</html>", &ctx());
        assert!(matches!(result, Err(ParserError::MissingPayload(_))));
    }
}
