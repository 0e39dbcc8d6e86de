use crate::config::HarvestConfig;
use crate::error::HarvestError;
use crate::filter::TermFilter;
use crate::parsers::html;
use crate::report;
use crate::results::{HarvestOutcome, NewsItem, ReportRow};
use crate::session::NewsSession;

/// Runs one harvest pass against an open session.
///
/// Items whose description cannot be fetched are dropped. The report is only
/// written when at least one row survives.
pub async fn harvest<S: NewsSession>(
    session: &mut S,
    config: &HarvestConfig,
    filter: &TermFilter,
) -> Result<HarvestOutcome, HarvestError> {
    let homepage = session.homepage(&config.homepage_url).await?;

    let items = html::news_items(&homepage, filter);
    if items.is_empty() {
        ::log::info!(
            "No headlines found on {}, or every headline matched a blocked term",
            homepage.url
        );
        return Ok(HarvestOutcome::NoHeadlines);
    }
    ::log::info!("Found {} headlines on {}", items.len(), homepage.url);

    let attempted = items.len();
    let rows = describe_all(session, items).await;
    if rows.is_empty() {
        ::log::info!("No descriptions found for any of {} headlines", attempted);
        return Ok(HarvestOutcome::NoDescriptions { attempted });
    }

    report::write_report(&config.output_path, &rows)?;
    ::log::info!(
        "Saved {} of {} headlines with descriptions to '{}'",
        rows.len(),
        attempted,
        config.output_path.display()
    );

    Ok(HarvestOutcome::Written {
        path: config.output_path.clone(),
        rows: rows.len(),
    })
}

/// Fetches descriptions one link at a time, keeping item order
async fn describe_all<S: NewsSession>(session: &mut S, items: Vec<NewsItem>) -> Vec<ReportRow> {
    let mut rows = Vec::with_capacity(items.len());

    for item in items {
        match session.describe(&item.link).await {
            Ok(description) if !description.is_empty() => {
                rows.push(ReportRow::new(item, description));
            }
            Ok(_) => {
                ::log::warn!("Empty description for {}", item.link);
            }
            Err(e) => {
                ::log::error!("Failed to fetch description: {}", e);
            }
        }
    }

    rows
}
