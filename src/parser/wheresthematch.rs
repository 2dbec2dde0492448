// WherestheMatch: HTML table of today's televised fixtures, times in UK local time
use crate::model::{MatchRecord, ParserError, ScrapeRequest};
use crate::parser::{selector, ParseContext, SourceParser};
use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Europe::London;
use scraper::{ElementRef, Html};

pub struct WheresTheMatchParser {
    url: String,
}

impl WheresTheMatchParser {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl SourceParser for WheresTheMatchParser {
    fn name(&self) -> &'static str {
        "WherestheMatch"
    }

    fn request(&self) -> ScrapeRequest {
        ScrapeRequest::get(&self.url)
    }

    fn parse(&self, body: &str, ctx: &ParseContext) -> Result<Vec<MatchRecord>, ParserError> {
        let document = Html::parse_document(body);
        let row_selector = selector("tr")?;
        let fixture_selector = selector("td.fixture-details")?;
        let start_selector = selector("td.start-details")?;
        let channel_selector = selector("td.channel-details")?;
        let link_selector = selector("a")?;
        let comp_selector = selector("span.fixture-comp")?;
        let time_selector = selector("span.time")?;
        let img_selector = selector("img")?;

        let mut matches = Vec::new();
        for row in document.select(&row_selector) {
            let (Some(fixture), Some(start)) = (
                row.select(&fixture_selector).next(),
                row.select(&start_selector).next(),
            ) else {
                continue;
            };

            let links: Vec<ElementRef> = fixture.select(&link_selector).collect();
            if links.len() < 2 {
                continue;
            }
            let home = text_of(links[0]);
            let away = text_of(links[1]);

            let competition = fixture
                .select(&comp_selector)
                .next()
                .map(|comp| comp.text().map(str::trim).filter(|t| !t.is_empty()).collect::<Vec<_>>().join(" "))
                .unwrap_or_else(|| "Unknown".to_string());

            let kickoff = start
                .select(&time_selector)
                .next()
                .and_then(|span| london_kickoff(&text_of(span), ctx.now));

            let channels: Vec<String> = row
                .select(&channel_selector)
                .next()
                .map(|cell| {
                    cell.select(&img_selector)
                        .map(|img| img.value().attr("title").unwrap_or("Unknown").to_string())
                        .collect()
                })
                .unwrap_or_default();

            let mut record = MatchRecord::new(home, away, competition).with_channels(channels);
            record.kickoff = kickoff;
            matches.push(record);
        }

        Ok(matches)
    }
}

fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// `HH:MM` on the current UK date.
fn london_kickoff(time: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let time = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    let today = now.with_timezone(&London).date_naive();
    London
        .from_local_datetime(&today.and_time(time))
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}
