//! # Coaster Log
//!
//! Data-derivation engine for a personal roller coaster ride log dashboard.
//!
//! A small, static log of ridden coasters is enriched with configuration
//! lookups, aggregated into summary statistics and projected into the
//! chart-ready view models a dashboard front end renders. The backend serves
//! those view models over a REST API via Axum.
//!
//! ## Features
//!
//! - **Record Store**: Bundled JSON ride log, validated at load
//! - **Enrichment**: Park groups, manufacturer abbreviations, POV videos
//! - **Aggregation**: Totals, maxima, averages and per-category counts
//! - **Views**: Rankings, scatter, timeline, distributions and leaderboards
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! - [`models`]: Raw and enriched coaster entities, unit newtypes
//! - [`store`]: Dataset loading and validation
//! - [`config`]: Lookup tables and display limits
//! - [`services`]: The derivation pipeline and [`services::DashboardSnapshot`]
//! - [`routes`]: View-model types, one file per dashboard view
//! - [`api`]: Consolidated DTO re-exports
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use coaster_log::services::DashboardSnapshot;
//!
//! let snapshot = DashboardSnapshot::load_default().unwrap();
//! let tallest = &snapshot.height_ranking.entries[0];
//! assert_eq!(tallest.full_name, "Fury 325");
//! ```

pub mod api;
pub mod checksum;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;

pub use config::DashboardConfig;
pub use error::{DashboardError, DashboardResult};
pub use services::DashboardSnapshot;
