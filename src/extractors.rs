use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use rand::{rngs::StdRng, SeedableRng};

use crate::AppState;

/// Random source for one request: seeded from the configured shuffle seed
/// when there is one, otherwise from a fresh random seed.
pub struct RequestRng(pub StdRng);

impl FromRequestParts<AppState> for RequestRng {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let seed = state.shuffle_seed.unwrap_or_else(rand::random);
        tracing::debug!("request shuffle seed: {seed}");
        Ok(RequestRng(StdRng::seed_from_u64(seed)))
    }
}
