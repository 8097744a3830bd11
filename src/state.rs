//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! role API is stateless apart from the database, so it only holds the pool.

use sqlx::PgPool;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
