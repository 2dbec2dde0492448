pub mod http;
pub mod traits;

pub use http::ScraperImpl;
pub use traits::Scraper;
