use crate::errors::CipherError;
use crate::number_theory::primes_in_range;

use lazy_static::lazy_static;

use serde::{Deserialize, Serialize};

/// Lower bound of the default prime range.
pub const DEFAULT_POOL_MIN: u64 = 50;
/// Upper bound of the default prime range.
pub const DEFAULT_POOL_MAX: u64 = 150;

lazy_static! {
    /// Every prime in `[DEFAULT_POOL_MIN, DEFAULT_POOL_MAX]`, built on first use
    /// and shared read-only by every key generation request.
    pub static ref DEFAULT_PRIME_POOL: PrimePool = PrimePool::collect(DEFAULT_POOL_MIN, DEFAULT_POOL_MAX);
}

/// Inclusive range the prime pool is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub min: u64,
    pub max: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_POOL_MIN,
            max: DEFAULT_POOL_MAX,
        }
    }
}

impl PoolConfig {
    /// Parses a config from JSON. Missing fields fall back to the defaults.
    pub fn from_json(data: &str) -> Result<Self, CipherError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Enumerates the primes of this range.
    pub fn build(&self) -> Result<PrimePool, CipherError> {
        PrimePool::in_range(self.min, self.max)
    }
}

/// Ascending primes of an inclusive range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimePool {
    min: u64,
    max: u64,
    primes: Vec<u64>,
}

impl PrimePool {
    /// Enumerates the primes in `[min, max]`.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` when `min > max`, `PoolTooSmall` when the range holds
    /// fewer than two primes.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_ciphers::PrimePool;
    /// let pool = PrimePool::in_range(10, 20).unwrap();
    /// assert_eq!(pool.primes(), &[11, 13, 17, 19]);
    /// assert!(PrimePool::in_range(24, 28).is_err());
    /// ```
    pub fn in_range(min: u64, max: u64) -> Result<Self, CipherError> {
        if min > max {
            return Err(CipherError::InvalidParameters(format!(
                "Pool range is empty: min {} > max {}",
                min, max
            )));
        }

        let pool = Self::collect(min, max);
        if pool.len() < 2 {
            return Err(CipherError::PoolTooSmall(pool.len()));
        }

        Ok(pool)
    }

    fn collect(min: u64, max: u64) -> Self {
        let primes = primes_in_range(min, max);
        log::debug!("Prime pool [{}, {}] holds {} primes", min, max, primes.len());

        Self { min, max, primes }
    }

    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }
}

impl AsRef<[u64]> for PrimePool {
    fn as_ref(&self) -> &[u64] {
        &self.primes
    }
}
