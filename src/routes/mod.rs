//! Router modules, segregated by access level.
//!
//! `public` carries anonymous read-only endpoints and the session gateway;
//! `authenticated` requires a resolved `AuthUser`; `admin` additionally
//! passes every request through the declarative route-permission registry
//! (see `crate::permissions`), deny-by-default.

pub mod admin;
pub mod authenticated;
pub mod public;
