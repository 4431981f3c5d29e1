//! Domain logic for the airport booking backend.
//!
//! Everything in this crate is pure: no database, no HTTP. The `db` and
//! `api` crates call into it for seat bounds, availability arithmetic,
//! flight search parsing and other rules that must hold regardless of
//! which transport delivered the request.

pub mod booking;
pub mod error;
pub mod fields;
pub mod flight_search;
pub mod images;
pub mod pagination;
pub mod roles;
pub mod schedule;
pub mod types;
