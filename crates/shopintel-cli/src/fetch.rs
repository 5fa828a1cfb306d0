//! `fetch` command handler.

use std::io::Write;

use shopintel_scraper::{BrandInsights, InsightsFetcher};

/// Runs the insights pipeline for `url` and writes the record to stdout.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, the storefront
/// homepage cannot be fetched, or stdout cannot be written.
pub(crate) async fn run_fetch(
    config: &shopintel_core::AppConfig,
    url: &str,
    pretty: bool,
    timeout_secs: Option<u64>,
) -> anyhow::Result<()> {
    let timeout_secs = timeout_secs.unwrap_or(config.request_timeout_secs);
    let fetcher = InsightsFetcher::new(timeout_secs, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {e}"))?;

    let insights = fetcher.fetch_insights(url).await?;
    tracing::debug!(url, pretty, "writing insights record");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_insights(&mut out, &insights, pretty)
}

pub(crate) fn write_insights(
    out: &mut impl Write,
    insights: &BrandInsights,
    pretty: bool,
) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, insights)?;
    } else {
        serde_json::to_writer(&mut *out, insights)?;
    }
    writeln!(out)?;
    Ok(())
}
