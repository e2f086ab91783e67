//! Pulls every selected board and merges the results, newest first.

use tracing::{error, info};

use crate::errors::AppError;
use crate::feeds::fetcher::FeedFetcher;
use crate::feeds::listing::JobListing;
use crate::feeds::sources::FeedSource;

/// Entries taken from the top of each feed.
pub const ENTRIES_PER_FEED: usize = 15;

/// Fetches each source in turn. A failing source contributes nothing;
/// if no source contributes anything the call fails with `NotFound`.
pub async fn aggregate_jobs(
    fetcher: &dyn FeedFetcher,
    sources: &[FeedSource],
) -> Result<Vec<JobListing>, AppError> {
    let mut jobs = Vec::new();

    for source in sources {
        info!("Fetching {} RSS feed", source.name);
        match fetcher.fetch(&source.url).await {
            Ok(channel) => {
                let before = jobs.len();
                jobs.extend(
                    channel
                        .items()
                        .iter()
                        .take(ENTRIES_PER_FEED)
                        .map(|item| JobListing::from_item(item, source)),
                );
                info!("{}: {} listings", source.name, jobs.len() - before);
            }
            Err(e) => error!("Error fetching {} feed: {e}", source.name),
        }
    }

    if jobs.is_empty() {
        return Err(AppError::NotFound("No jobs found from any source".to_string()));
    }

    sort_newest_first(&mut jobs);
    Ok(jobs)
}

/// Descending by publish date; undated listings last, in fetch order.
pub fn sort_newest_first(jobs: &mut [JobListing]) {
    // None < Some(_), so a descending sort leaves undated entries at the end.
    jobs.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}
