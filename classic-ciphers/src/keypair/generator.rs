use crate::errors::CipherError;
use crate::keypair::keys::KeyPair;
use crate::number_theory::is_prime;

use itertools::Itertools;

use rand::Rng;
use rand::seq::IndexedRandom;

/// Upper bound on redraws of `q` while it collides with `p`.
pub const MAX_SAMPLING_ATTEMPTS: usize = 10_000;

/// Generates a fresh key pair from two distinct primes drawn out of `pool`.
///
/// Uses the thread-local RNG. See [`generate_key_pair_with_rng`].
pub fn generate_key_pair(pool: &[u64]) -> Result<KeyPair, CipherError> {
    generate_key_pair_with_rng(pool, &mut rand::rng())
}

/// Generates a key pair drawing `p` and `q` uniformly from `pool` with `rng`.
///
/// `q` is redrawn until it differs from `p`, at most
/// [`MAX_SAMPLING_ATTEMPTS`] times.
///
/// # Errors
///
/// * `PoolTooSmall` if the pool holds fewer than two distinct values.
/// * `SamplingExhausted` if no `q` distinct from `p` turned up within the
///   retry bound.
/// * `NotPrime` if any pool element is composite (or below 2).
///
/// # Example
///
/// ```
/// # use classic_ciphers::keypair::generate_key_pair_with_rng;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let pool = [53, 59, 61];
/// let first = generate_key_pair_with_rng(&pool, &mut StdRng::seed_from_u64(7)).unwrap();
/// let second = generate_key_pair_with_rng(&pool, &mut StdRng::seed_from_u64(7)).unwrap();
/// assert_eq!(first, second);
/// ```
pub fn generate_key_pair_with_rng<R: Rng + ?Sized>(
    pool: &[u64],
    rng: &mut R,
) -> Result<KeyPair, CipherError> {
    let distinct = pool.iter().unique().count();
    if distinct < 2 {
        return Err(CipherError::PoolTooSmall(distinct));
    }
    if let Some(&composite) = pool.iter().find(|&&candidate| !is_prime(candidate)) {
        return Err(CipherError::NotPrime(composite));
    }

    let (p, q) = draw_distinct_pair(pool, rng)?;

    let key_pair = KeyPair::from_primes(p, q)?;
    log::debug!(
        "Generated key pair p={} q={} n={} e={} d={}",
        key_pair.p(),
        key_pair.q(),
        key_pair.n(),
        key_pair.e(),
        key_pair.d()
    );

    Ok(key_pair)
}

/// Rejection sampling for `q != p`.
fn draw_distinct_pair<R: Rng + ?Sized>(
    pool: &[u64],
    rng: &mut R,
) -> Result<(u64, u64), CipherError> {
    let &p = pool.choose(rng).ok_or(CipherError::PoolTooSmall(0))?;

    for attempt in 0..MAX_SAMPLING_ATTEMPTS {
        let &q = pool.choose(rng).ok_or(CipherError::PoolTooSmall(0))?;
        if q != p {
            log::trace!("Drew q after {} redraws", attempt);
            return Ok((p, q));
        }
    }

    log::warn!(
        "Gave up drawing a prime distinct from {} after {} attempts",
        p,
        MAX_SAMPLING_ATTEMPTS
    );
    Err(CipherError::SamplingExhausted {
        p,
        attempts: MAX_SAMPLING_ATTEMPTS,
    })
}
