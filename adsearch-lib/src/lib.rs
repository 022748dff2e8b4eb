//! Paginated keyword search client library
//!
//! Lists the keyword criteria of an advertising account through a tabular,
//! paginated search API and renders them as text.
//!
//! - [`api::query`] builds query text and iterates result pages lazily
//! - [`AdsClient`] is the HTTP [`api::SearchService`]
//! - [`format`] renders rows and failure diagnostics

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod format;
pub mod model;

mod client;

pub use client::*;
