//! Content-headline lookup
//!
//! Author and review ids point into an external content system; when an id
//! is valid, the normalizer asks a [`HeadlineSource`] for the headline of
//! the corresponding page. The HTTP implementation fetches the page and
//! extracts the first `h1` inside the story-title region. Tests substitute
//! a canned source, since the live system is not idempotent.

use std::time::Duration;

use scraper::{Html, Selector};

use crate::error::Result;

/// CSS selector for the headline within the known content region
const HEADLINE_SELECTOR: &str = "div.storytitle h1";

/// Resolves a numeric content id to a page headline.
///
/// `Ok(None)` means the page had no recognizable headline region, which is
/// a recoverable miss rather than a protocol error.
pub trait HeadlineSource {
    fn headline(&self, id: &str) -> Result<Option<String>>;
}

/// HTTP-backed headline source.
pub struct HttpHeadlineSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpHeadlineSource {
    /// Create a source for the given content system base URL.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl HeadlineSource for HttpHeadlineSource {
    fn headline(&self, id: &str) -> Result<Option<String>> {
        let url = format!("{}/{}", self.base_url, id);
        tracing::debug!(%url, "fetching headline");
        let body = self.client.get(&url).send()?.text()?;
        Ok(extract_headline(&body))
    }
}

/// Pull the first headline out of a content page, if the expected region
/// exists.
pub fn extract_headline(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(HEADLINE_SELECTOR).unwrap();
    document
        .select(&selector)
        .next()
        .map(|h1| h1.text().collect::<String>().trim().to_string())
}

/// A headline source that never resolves anything. Useful when running the
/// normalizer offline.
pub struct NoHeadlines;

impl HeadlineSource for NoHeadlines {
    fn headline(&self, _id: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_headline_from_content_region() {
        let html = r#"
            <html><body>
              <div class="storytitle">
                <h1>  A Year Of Reading: The Best Books Of 2011 </h1>
              </div>
            </body></html>
        "#;
        assert_eq!(
            extract_headline(html).as_deref(),
            Some("A Year Of Reading: The Best Books Of 2011")
        );
    }

    #[test]
    fn takes_the_first_headline_when_several_match() {
        let html = r#"
            <div class="storytitle"><h1>First</h1><h1>Second</h1></div>
        "#;
        assert_eq!(extract_headline(html).as_deref(), Some("First"));
    }

    #[test]
    fn missing_region_is_a_miss_not_an_error() {
        let html = "<html><body><h1>Bare headline</h1></body></html>";
        assert_eq!(extract_headline(html), None);
    }
}
