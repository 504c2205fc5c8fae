// Shoebox - terminal dashboard for running activities and shoe wear
//
// Architecture:
// - stats: wire types, HTTP client and the aggregation engine
// - controller / tabs / dashboard: request lifecycle and view state
// - report: plain-text rendering for headless runs
// - tui (ratatui): interactive dashboard
// - demo (axum): in-process backend serving generated data

pub mod cli;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod demo;
pub mod format;
pub mod logging;
pub mod report;
pub mod stats;
pub mod tabs;
pub mod tui;
