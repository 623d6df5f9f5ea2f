//! Parallel batch key generation.

use rayon::prelude::*;
use rayon::{ThreadPoolBuildError, ThreadPoolBuilder};

use crate::crypto::{Curve, KeyError, PrivateKey, Zeroizing};

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error("failed to start worker pool: {0}")]
    Pool(#[from] ThreadPoolBuildError),
}

/// Generates `count` independent private keys on `workers` threads.
///
/// Each worker draws from its own thread-local CSPRNG. Keys are returned as
/// `EC PRIVATE KEY` PEM documents.
pub fn generate_batch(
    curve: Curve,
    count: usize,
    workers: usize,
) -> Result<Vec<Zeroizing<String>>, BatchError> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers.clamp(1, count))
        .thread_name(|id| format!("keygen-worker-{}", id))
        .build()?;

    tracing::info!(%curve, count, threads = pool.current_num_threads(), "generating keys");

    let keys = pool.install(|| {
        (0..count)
            .into_par_iter()
            .map(|_| PrivateKey::generate(curve).to_pem())
            .collect::<Result<Vec<_>, KeyError>>()
    })?;

    Ok(keys)
}
