// OneFootball: Next.js page with the fixture list in __NEXT_DATA__
use crate::model::{MatchRecord, ParserError, ScrapeRequest, SourceExtras};
use crate::parser::{selector, ParseContext, SourceParser};
use crate::utils::{parse_utc, score_text, str_at};
use scraper::Html;
use serde_json::Value;

const KICKOFF_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub struct OneFootballParser {
    url: String,
}

impl OneFootballParser {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl SourceParser for OneFootballParser {
    fn name(&self) -> &'static str {
        "OneFootball"
    }

    fn request(&self) -> ScrapeRequest {
        ScrapeRequest::get(&self.url)
    }

    /// Any card with a missing or malformed kickoff fails the whole page.
    fn parse(&self, body: &str, _ctx: &ParseContext) -> Result<Vec<MatchRecord>, ParserError> {
        let document = Html::parse_document(body);
        let script_selector = selector("script#__NEXT_DATA__")?;
        let script = document
            .select(&script_selector)
            .next()
            .ok_or(ParserError::MissingPayload("__NEXT_DATA__"))?;
        let data: Value = serde_json::from_str(&script.text().collect::<String>())?;

        let containers = data
            .pointer("/props/pageProps/containers")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let mut matches = Vec::new();
        for container in containers {
            let Some(component) = container.pointer("/type/fullWidth/component") else {
                continue;
            };
            if str_at(component, "/contentType/$case") != Some("matchCardsList") {
                continue;
            }
            let cards = component
                .pointer("/contentType/matchCardsList/matchCards")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();

            for card in cards {
                matches.push(parse_card(card)?);
            }
        }

        Ok(matches)
    }
}

fn parse_card(card: &Value) -> Result<MatchRecord, ParserError> {
    let competition = str_at(card, "/trackingEvents/0/typedServerParameter/competition/value").unwrap_or("Unknown");
    let home = str_at(card, "/homeTeam/name").unwrap_or("Unknown");
    let away = str_at(card, "/awayTeam/name").unwrap_or("Unknown");
    let kickoff = parse_utc(str_at(card, "/kickoff").unwrap_or_default(), KICKOFF_FORMAT)?;

    let extras = SourceExtras::OneFootball {
        match_id: match card.get("matchId") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => String::new(),
        },
        home_logo: str_at(card, "/homeTeam/imageObject/path").unwrap_or_default().to_string(),
        away_logo: str_at(card, "/awayTeam/imageObject/path").unwrap_or_default().to_string(),
        home_score: score_text(card.pointer("/homeTeam/score")),
        away_score: score_text(card.pointer("/awayTeam/score")),
    };

    Ok(MatchRecord::new(home, away, competition)
        .with_kickoff(kickoff)
        .with_extras(extras))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn page(cards: Value) -> String {
        let data = json!({
            "props": { "pageProps": { "containers": [
                { "type": { "fullWidth": { "component": { "contentType": { "$case": "promoBanner" } } } } },
                { "type": { "fullWidth": { "component": { "contentType": {
                    "$case": "matchCardsList",
                    "matchCardsList": { "matchCards": cards }
                } } } } }
            ] } }
        });
        format!(
            r#"<html><head><script id="__NEXT_DATA__" type="application/json">{}</script></head><body></body></html>"#,
            data
        )
    }

    fn parse(body: &str) -> Result<Vec<MatchRecord>, ParserError> {
        OneFootballParser::new("https://example.test").parse(body, &ParseContext::now())
    }

    #[test]
    fn parses_match_cards() {
        let body = page(json!([{
            "matchId": 2468,
            "kickoff": "2025-03-15T15:00:00Z",
            "homeTeam": { "name": "Arsenal", "score": 2, "imageObject": { "path": "https://img/ars.png" } },
            "awayTeam": { "name": "Chelsea", "imageObject": { "path": "https://img/che.png" } },
            "trackingEvents": [{ "typedServerParameter": { "competition": { "value": "Premier League" } } }]
        }]));

        let out = parse(&body).unwrap();
        assert_eq!(out.len(), 1);
        let m = &out[0];
        assert_eq!((m.home.as_str(), m.away.as_str()), ("Arsenal", "Chelsea"));
        assert_eq!(m.competition, "Premier League");
        assert_eq!(m.kickoff, Some(Utc.with_ymd_and_hms(2025, 3, 15, 15, 0, 0).unwrap()));
        assert!(m.channels.is_empty());
        assert_eq!(
            m.extras,
            SourceExtras::OneFootball {
                match_id: "2468".into(),
                home_logo: "https://img/ars.png".into(),
                away_logo: "https://img/che.png".into(),
                home_score: "2".into(),
                away_score: "0".into(),
            }
        );
    }

    #[test]
    fn missing_fields_fall_back() {
        let body = page(json!([{ "kickoff": "2025-03-15T18:30:00Z" }]));
        let out = parse(&body).unwrap();
        assert_eq!(out[0].home, "Unknown");
        assert_eq!(out[0].away, "Unknown");
        assert_eq!(out[0].competition, "Unknown");
        assert_eq!(out[0].extras.match_id(), Some(""));
    }

    #[test]
    fn bad_kickoff_fails_the_page() {
        let body = page(json!([
            { "kickoff": "2025-03-15T15:00:00Z", "homeTeam": { "name": "A" }, "awayTeam": { "name": "B" } },
            { "kickoff": "15 March 2025", "homeTeam": { "name": "C" }, "awayTeam": { "name": "D" } }
        ]));
        assert!(matches!(parse(&body), Err(ParserError::InvalidKickoff { .. })));
    }

    #[test]
    fn page_without_payload() {
        let result = parse("<html><body>maintenance</body></html>");
        assert!(matches!(result, Err(ParserError::MissingPayload(_))));
    }
}
