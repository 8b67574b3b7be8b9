//! HTTP handlers, one module per domain entity. Role checks go through the
//! permission registry (`crate::permissions`); ownership checks are pushed
//! down into the repository queries.

pub mod countries;
pub mod languages;
pub mod movies;
pub mod regions;
pub mod session;
pub mod users;
