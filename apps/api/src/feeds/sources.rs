//! Job board feed definitions and `?source=` selection.

use reqwest::Url;

pub const REMOTIVE_FEED_URL: &str = "https://remotive.com/api/remote-jobs/feed";
pub const WWR_FEED_URL: &str = "https://weworkremotely.com/remote-jobs.rss";
pub const INDEED_FEED_URL: &str = "https://www.indeed.com/rss";

const DEFAULT_INDEED_QUERY: &str = "remote";

/// One job board feed and how its entries are labelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSource {
    /// Human-readable board name, copied into every listing.
    pub name: &'static str,
    pub url: String,
    /// Location reported for every listing from this board.
    pub location: String,
    /// Appended to the link before hashing, so the same link on two boards
    /// is unlikely to share an id.
    pub id_salt: &'static str,
}

impl FeedSource {
    pub fn remotive() -> Self {
        Self {
            name: "Remotive",
            url: REMOTIVE_FEED_URL.to_string(),
            location: "Remote".to_string(),
            id_salt: "",
        }
    }

    pub fn we_work_remotely() -> Self {
        Self {
            name: "We Work Remotely",
            url: WWR_FEED_URL.to_string(),
            location: "Anywhere".to_string(),
            id_salt: "wwr",
        }
    }

    /// Indeed search feed for `query` near `location` (empty = anywhere).
    pub fn indeed(query: &str, location: &str) -> Self {
        let query = if query.trim().is_empty() {
            DEFAULT_INDEED_QUERY
        } else {
            query.trim()
        };
        let location = location.trim();

        let url = Url::parse_with_params(INDEED_FEED_URL, &[("q", query), ("l", location)])
            .map(String::from)
            .unwrap_or_else(|_| INDEED_FEED_URL.to_string());

        Self {
            name: "Indeed",
            url,
            location: if location.is_empty() {
                "Remote".to_string()
            } else {
                location.to_string()
            },
            id_salt: "indeed",
        }
    }
}

/// Resolves a `?source=` value to the feeds to query.
///
/// `all` covers the fixed boards only; Indeed is searched on explicit request.
/// Unknown values select nothing.
pub fn select_sources(source: &str, query: &str, location: &str) -> Vec<FeedSource> {
    match source {
        "all" => vec![FeedSource::remotive(), FeedSource::we_work_remotely()],
        "remotive" => vec![FeedSource::remotive()],
        "wwremote" => vec![FeedSource::we_work_remotely()],
        "indeed" => vec![FeedSource::indeed(query, location)],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_selects_fixed_boards() {
        let sources = select_sources("all", "", "");
        let names: Vec<_> = sources.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Remotive", "We Work Remotely"]);
    }

    #[test]
    fn test_single_board_selection() {
        assert_eq!(select_sources("remotive", "", ""), vec![FeedSource::remotive()]);
        assert_eq!(
            select_sources("wwremote", "", ""),
            vec![FeedSource::we_work_remotely()]
        );
    }

    #[test]
    fn test_unknown_source_selects_nothing() {
        assert!(select_sources("linkedin", "", "").is_empty());
        assert!(select_sources("", "", "").is_empty());
    }

    #[test]
    fn test_indeed_url_encodes_query() {
        let source = FeedSource::indeed("rust developer", "New York, NY");
        assert_eq!(
            source.url,
            "https://www.indeed.com/rss?q=rust+developer&l=New+York%2C+NY"
        );
        assert_eq!(source.location, "New York, NY");
    }

    #[test]
    fn test_indeed_defaults() {
        let source = FeedSource::indeed("  ", "");
        assert_eq!(source.url, "https://www.indeed.com/rss?q=remote&l=");
        assert_eq!(source.location, "Remote");
    }
}
