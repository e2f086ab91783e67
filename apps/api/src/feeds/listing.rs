//! Feed entry → `JobListing` mapping.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use rss::Item;
use serde::Serialize;

use crate::feeds::sources::FeedSource;

/// Summaries longer than this many characters are cut and suffixed with "...".
pub const SUMMARY_MAX_CHARS: usize = 250;

const BUDGET_PLACEHOLDER: &str = "See job posting";

/// Ids are kept within 53 bits so JavaScript numbers represent them exactly.
const JOB_ID_MASK: u64 = (1 << 53) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    #[serde(rename = "Contract")]
    Contract,
}

/// A normalized job listing, rebuilt from the feed on every request.
#[derive(Debug, Clone, Serialize)]
pub struct JobListing {
    /// Hash of the link. Advisory only: collisions are not resolved.
    pub id: u64,
    pub title: String,
    pub link: String,
    pub description: String,
    pub summary: String,
    /// "January 05, 2024", or the raw feed date when it cannot be parsed.
    pub published: String,
    /// ISO-8601 UTC timestamp, `null` when the feed date cannot be parsed.
    pub published_date: Option<String>,
    pub posted: String,
    pub source: String,
    pub budget: String,
    pub job_type: JobType,
    pub location: String,
    pub skills: Vec<String>,
    #[serde(skip)]
    pub published_at: Option<DateTime<Utc>>,
}

impl JobListing {
    pub fn from_item(item: &Item, source: &FeedSource) -> Self {
        let title = item.title().unwrap_or("No Title").to_string();
        let link = item.link().unwrap_or("#").to_string();
        let summary = truncate_summary(item.description().unwrap_or("No description available"));

        let raw_date = item.pub_date().unwrap_or("N/A");
        let published_at = parse_pub_date(raw_date);
        let published = match published_at {
            Some(date) => date.format("%B %d, %Y").to_string(),
            None => raw_date.to_string(),
        };

        JobListing {
            id: job_id(item.link().unwrap_or(""), source.id_salt),
            job_type: classify_job_type(&title, &summary),
            title,
            link,
            description: summary.clone(),
            summary,
            posted: published.clone(),
            published,
            published_date: published_at.map(|d| d.format("%Y-%m-%dT%H:%M:%S").to_string()),
            source: source.name.to_string(),
            budget: BUDGET_PLACEHOLDER.to_string(),
            location: source.location.clone(),
            skills: Vec::new(),
            published_at,
        }
    }
}

/// Guesses the engagement type from title and summary keywords.
/// Contract/freelance in the title wins over part-time.
pub fn classify_job_type(title: &str, summary: &str) -> JobType {
    let title = title.to_lowercase();
    let summary = summary.to_lowercase();

    if title.contains("contract") || title.contains("freelance") {
        JobType::Contract
    } else if title.contains("part-time") || summary.contains("part time") {
        JobType::PartTime
    } else {
        JobType::FullTime
    }
}

pub fn truncate_summary(summary: &str) -> String {
    match summary.char_indices().nth(SUMMARY_MAX_CHARS) {
        Some((cut, _)) => format!("{}...", &summary[..cut]),
        None => summary.to_string(),
    }
}

/// RSS dates are RFC 2822; some boards emit RFC 3339 instead.
pub fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

pub fn job_id(link: &str, salt: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    link.hash(&mut hasher);
    salt.hash(&mut hasher);
    hasher.finish() & JOB_ID_MASK
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, link: &str, description: &str, pub_date: Option<&str>) -> Item {
        let mut item = Item::default();
        item.set_title(title.to_string());
        item.set_link(link.to_string());
        item.set_description(description.to_string());
        item.set_pub_date(pub_date.map(str::to_string));
        item
    }

    #[test]
    fn test_from_item_maps_every_field() {
        let entry = item(
            "Senior Rust Engineer",
            "https://remotive.com/jobs/1",
            "Build things.",
            Some("Fri, 05 Jan 2024 10:30:00 +0000"),
        );
        let listing = JobListing::from_item(&entry, &FeedSource::remotive());

        assert_eq!(listing.title, "Senior Rust Engineer");
        assert_eq!(listing.link, "https://remotive.com/jobs/1");
        assert_eq!(listing.description, "Build things.");
        assert_eq!(listing.summary, "Build things.");
        assert_eq!(listing.published, "January 05, 2024");
        assert_eq!(listing.posted, "January 05, 2024");
        assert_eq!(listing.published_date.as_deref(), Some("2024-01-05T10:30:00"));
        assert_eq!(listing.source, "Remotive");
        assert_eq!(listing.location, "Remote");
        assert_eq!(listing.budget, "See job posting");
        assert_eq!(listing.job_type, JobType::FullTime);
        assert!(listing.skills.is_empty());
        assert_eq!(listing.id, job_id("https://remotive.com/jobs/1", ""));
    }

    #[test]
    fn test_from_item_defaults_for_missing_fields() {
        let listing = JobListing::from_item(&Item::default(), &FeedSource::we_work_remotely());
        assert_eq!(listing.title, "No Title");
        assert_eq!(listing.link, "#");
        assert_eq!(listing.summary, "No description available");
        assert_eq!(listing.published, "N/A");
        assert!(listing.published_date.is_none());
        assert_eq!(listing.location, "Anywhere");
    }

    #[test]
    fn test_unparseable_date_keeps_raw_text() {
        let entry = item("Dev", "https://x/1", "d", Some("sometime last week"));
        let listing = JobListing::from_item(&entry, &FeedSource::remotive());
        assert_eq!(listing.published, "sometime last week");
        assert!(listing.published_at.is_none());
    }

    #[test]
    fn test_published_date_is_normalized_to_utc() {
        let date = parse_pub_date("Fri, 05 Jan 2024 02:00:00 -0500").unwrap();
        assert_eq!(date.format("%Y-%m-%dT%H:%M:%S").to_string(), "2024-01-05T07:00:00");
        assert!(parse_pub_date("2024-01-05T07:00:00Z").is_some());
        assert!(parse_pub_date("").is_none());
    }

    #[test]
    fn test_job_type_heuristics() {
        assert_eq!(classify_job_type("Backend Dev", "full role"), JobType::FullTime);
        assert_eq!(classify_job_type("Part-Time QA", ""), JobType::PartTime);
        assert_eq!(
            classify_job_type("Support Agent", "This is a Part Time gig"),
            JobType::PartTime
        );
        assert_eq!(classify_job_type("Freelance Designer", ""), JobType::Contract);
        assert_eq!(
            classify_job_type("Part-time Contract Writer", ""),
            JobType::Contract
        );
        // "part-time" only counts in the title, "part time" only in the summary
        assert_eq!(classify_job_type("Editor", "part-time"), JobType::FullTime);
    }

    #[test]
    fn test_truncate_summary() {
        let short = "a".repeat(SUMMARY_MAX_CHARS);
        assert_eq!(truncate_summary(&short), short);

        let long = "b".repeat(SUMMARY_MAX_CHARS + 1);
        let cut = truncate_summary(&long);
        assert_eq!(cut.len(), SUMMARY_MAX_CHARS + 3);
        assert!(cut.ends_with("b..."));
    }

    #[test]
    fn test_truncate_summary_respects_char_boundaries() {
        let long = "ü".repeat(300);
        let cut = truncate_summary(&long);
        assert_eq!(cut.chars().count(), SUMMARY_MAX_CHARS + 3);
    }

    #[test]
    fn test_job_id_fits_in_a_javascript_number() {
        for i in 0..100 {
            let id = job_id(&format!("https://example.com/job/{i}"), "wwr");
            assert!(id <= JOB_ID_MASK);
            // Survives a round trip through an f64 unchanged
            assert_eq!(id as f64 as u64, id);
        }
    }

    #[test]
    fn test_job_id_differs_by_salt() {
        let link = "https://example.com/job/42";
        assert_eq!(job_id(link, "wwr"), job_id(link, "wwr"));
        assert_ne!(job_id(link, ""), job_id(link, "wwr"));
    }

    #[test]
    fn test_serialized_shape() {
        let entry = item("Contract Go Dev", "https://x/2", "desc", None);
        let listing = JobListing::from_item(&entry, &FeedSource::remotive());
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["job_type"], "Contract");
        assert!(json["published_date"].is_null());
        assert!(json.get("published_at").is_none());
        assert_eq!(json["skills"], serde_json::json!([]));
    }
}
