//! Data access layer: one function module per entity, each a thin
//! pass-through to sqlx with no business logic beyond select shaping.
//! Handlers depend on the trait objects, never on the pool, so tests can
//! swap in mocks.

use sqlx::PgPool;
use std::sync::Arc;

pub mod countries;
pub mod languages;
pub mod movies;
pub mod regions;
pub mod users;

pub use countries::CountryRepo;
pub use languages::LanguageRepo;
pub use movies::MovieRepo;
pub use regions::RegionRepo;
pub use users::UserRepo;

/// Repository
///
/// The combined persistence contract: one supertrait per entity module.
/// Anything implementing all of them is a full repository; the blanket impl
/// below makes that automatic.
pub trait Repository:
    MovieRepo + CountryRepo + RegionRepo + LanguageRepo + UserRepo + Send + Sync
{
}

impl<T> Repository for T where
    T: MovieRepo + CountryRepo + RegionRepo + LanguageRepo + UserRepo + Send + Sync
{
}

/// The shared, thread-safe handle handlers pull out of the application state.
pub type RepositoryState = Arc<dyn Repository>;

/// PostgresRepository
///
/// The concrete implementation, backed by the PostgreSQL pool. The
/// per-entity `impl` blocks live in their own modules.
pub struct PostgresRepository {
    pub(crate) pool: PgPool,
}

impl PostgresRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
