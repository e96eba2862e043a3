//! ROI Engine library crate.
//!
//! This crate exposes the core ROI calculation engine and API
//! components as reusable modules.  External applications may
//! depend on the `roi_engine` crate and call into `engine::calculate`
//! directly or embed the API via `api::build_router`.

pub mod models;
pub mod costs;
pub mod engine;
pub mod summary;
pub mod api;
