//! Last month's most-viewed articles per language

use std::sync::Arc;

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};

use crate::cache::TopArticlesCache;
use crate::client::WikiClient;
use crate::error::WikiError;
use crate::filter::filter_articles;

/// The last fully elapsed calendar month before `now`, as `(year, month)`
pub fn previous_month(now: DateTime<Utc>) -> (i32, u32) {
    let first = NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
        .and_then(|d| d.checked_sub_months(Months::new(1)));

    match first {
        Some(date) => (date.year(), date.month()),
        // Only unreachable dates at the very start of chrono's range land here
        None => (now.year(), now.month()),
    }
}

/// Get the filtered top list for `lang` for the month before `now`.
///
/// The list is fetched once per language and month and served from `cache`
/// afterwards. Entries are percent-encoded and ready to use as a path segment.
pub async fn top_articles(
    client: &WikiClient,
    cache: &TopArticlesCache,
    lang: &str,
    now: DateTime<Utc>,
) -> Result<Arc<[String]>, WikiError> {
    let (year, month) = previous_month(now);
    let url = client.top_url(lang, year, month);

    cache
        .get_or_populate(&url, || async {
            let raw = client.fetch_top_articles(&url).await?;
            let total = raw.len();
            let articles: Vec<String> = filter_articles(raw)
                .iter()
                .map(|a| urlencoding::encode(a).into_owned())
                .collect();
            tracing::info!(
                "Cached {} of {} top articles for {} {}-{:02}",
                articles.len(),
                total,
                lang,
                year,
                month
            );
            Ok::<_, WikiError>(articles)
        })
        .await
}
