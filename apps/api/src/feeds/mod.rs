// Remote job board RSS aggregation.

pub mod aggregator;
pub mod fetcher;
pub mod handlers;
pub mod listing;
pub mod sources;
