//! Joblist engine: HTTP listing client and query coordination.
mod client;
mod config;
mod coordinator;

pub use client::{FilterParams, HttpListingClient, ListingClient};
pub use config::SearchConfig;
pub use coordinator::QueryCoordinator;
