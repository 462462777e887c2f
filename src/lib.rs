pub mod batch;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interactive;
pub mod reply;
pub mod strategy;

pub use template_match_common::{match_template, Catalog, MatchResult, ScoringPolicy, Template};
