pub mod static_job;
