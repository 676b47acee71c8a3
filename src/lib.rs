pub mod api_connection;
pub mod cli;
pub mod config;
pub mod consolidator;
pub mod cost_estimator;
pub mod dietary_filter;
pub mod output;
pub mod quantity_parser;
pub mod units;
