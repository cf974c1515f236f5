//! # CESAFI Standings
//!
//! Computes league standings for CESAFI competition stages: ranked group
//! tables for group stages and positional brackets for knockout stages.
//!
//! ## Architecture
//!
//! - **models**: League entities, matches and standings output types
//! - **calculate**: Pure aggregation, ranking and bracket layout
//! - **standings**: Navigation resolution and the per-stage dispatch
//! - **storage**: Read-only league data access (JSONL tables, in-memory)
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod standings;
pub mod storage;

pub use models::*;
