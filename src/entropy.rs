use crate::{
    error::{Error, Result},
    rng::FastRng,
    source::{self, Source},
};

/// Entry point for every generator in this crate.
///
/// An `Entropy` owns the fast generator used by [`Source::Fast`]. It is seeded once when the value
/// is created and advanced by every fast call afterwards. The other sources hold no state here:
/// [`Source::Secure`] asks the platform's secure generator and [`Source::Device`] opens the device
/// file on every call.
///
/// `Entropy` is `Send` but not `Sync`. Share it between threads behind a lock.
///
/// # Example
/// ```
/// # use devrand::{Entropy, Source};
/// let entropy = Entropy::new();
/// let roll = entropy.int63n(6, &Source::Secure).unwrap();
/// assert!((0..6).contains(&roll));
/// ```
#[derive(Debug)]
pub struct Entropy {
    fast: FastRng,
}

impl Entropy {
    /// Creates a context whose fast generator is seeded from the secure generator. If that fails,
    /// the seed is derived from `std::hash::RandomState` and the clock.
    pub fn new() -> Self {
        Self::with_seed(seed())
    }

    /// Creates a context whose fast generator starts from `seed`.
    ///
    /// # Example
    /// ```
    /// # use devrand::{Entropy, Source};
    /// let (a, b) = (Entropy::with_seed(1), Entropy::with_seed(1));
    /// assert_eq!(a.int64_fast().unwrap(), b.int64_fast().unwrap());
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        Self {
            fast: FastRng::new(seed),
        }
    }

    /// Restarts the fast generator from `seed`.
    pub fn reseed(&self, seed: u64) {
        self.fast.reseed(seed);
    }

    /// The fast generator behind [`Source::Fast`].
    pub fn fast(&self) -> &FastRng {
        &self.fast
    }

    /// Fills `buf` with bytes from `source`.
    pub fn fill(&self, buf: &mut [u8], source: &Source) -> Result<()> {
        match source {
            Source::Fast => {
                self.fast.bytes(buf);
                Ok(())
            }
            Source::Secure => source::fill_secure(buf),
            Source::Device(path) => source::fill_device(path, buf),
        }
    }

    /// Reads `count` raw bytes from `source`. A count of zero returns an empty buffer without
    /// touching the source.
    pub fn read(&self, count: usize, source: &Source) -> Result<Vec<u8>> {
        let mut buf = vec![0; count];
        if count > 0 {
            self.fill(&mut buf, source)?;
        }
        Ok(buf)
    }

    /// Returns a non-negative value in `[0, n)`.
    ///
    /// The fast source samples without bias. The secure and device sources read a little-endian
    /// `i64` and reduce it modulo `n`, which slightly favours small values unless `n` is a power
    /// of two.
    ///
    /// # Errors
    /// [`Error::InvalidInterval`] if `n <= 0`, or the failure of the source.
    pub fn int63n(&self, n: i64, source: &Source) -> Result<i64> {
        if n <= 0 {
            return Err(Error::InvalidInterval(n));
        }
        match source {
            Source::Fast => Ok(self.fast.bounded(0..n)),
            _ => {
                let mut buf = [0; std::mem::size_of::<i64>()];
                self.fill(&mut buf, source)?;
                // The remainder lies in (-n, n), so `abs` cannot overflow.
                Ok((i64::from_le_bytes(buf) % n).abs())
            }
        }
    }

    /// Returns `length` random bytes from `source`.
    ///
    /// # Errors
    /// [`Error::InvalidLength`] if `length` is zero, or the failure of the source.
    ///
    /// # Example
    /// ```
    /// # use devrand::{Entropy, Source};
    /// let entropy = Entropy::new();
    /// assert_eq!(entropy.bytes(10, &Source::Fast).unwrap().len(), 10);
    /// assert!(entropy.bytes(0, &Source::Fast).is_err());
    /// ```
    pub fn bytes(&self, length: usize, source: &Source) -> Result<Vec<u8>> {
        if length == 0 {
            return Err(Error::InvalidLength);
        }
        self.read(length, source)
    }

    /// Reads 64 bytes from `source` as one big-endian unsigned integer and keeps its low 64 bits,
    /// reinterpreted as an `i64`.
    pub fn int64(&self, source: &Source) -> Result<i64> {
        let wide = self.bytes(64, source)?;
        let start = wide.len() - std::mem::size_of::<i64>();
        let mut low = [0; std::mem::size_of::<i64>()];
        low.copy_from_slice(&wide[start..]);
        Ok(i64::from_be_bytes(low))
    }

    /// [`int64`](Self::int64) from `/dev/urandom`.
    pub fn int64_urandom(&self) -> Result<i64> {
        self.int64(&Source::urandom())
    }

    /// [`int64`](Self::int64) from `/dev/random`. May block.
    pub fn int64_random(&self) -> Result<i64> {
        self.int64(&Source::random())
    }

    /// [`int64`](Self::int64) from the fast generator.
    pub fn int64_fast(&self) -> Result<i64> {
        self.int64(&Source::Fast)
    }

    /// [`int64`](Self::int64) from the secure generator.
    pub fn int64_secure(&self) -> Result<i64> {
        self.int64(&Source::Secure)
    }
}

impl Default for Entropy {
    /// Returns a new instance of `Entropy`.
    fn default() -> Self {
        Self::new()
    }
}

fn seed() -> u64 {
    let mut buf = [0; std::mem::size_of::<u64>()];
    if source::fill_secure(&mut buf).is_ok() {
        return u64::from_ne_bytes(buf);
    }
    use std::{
        hash::{BuildHasher, RandomState},
        time::{SystemTime, UNIX_EPOCH},
    };
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();
    RandomState::new().hash_one(nanos) ^ nanos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn non_positive_interval_fails() {
        let entropy = Entropy::with_seed(1);
        for source in [Source::Fast, Source::Secure, Source::urandom()] {
            for n in [0, -1, i64::MIN] {
                let err = entropy.int63n(n, &source).unwrap_err();
                assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            }
        }
    }

    #[test]
    fn interval_of_one_is_zero() {
        let entropy = Entropy::with_seed(1);
        for source in [Source::Fast, Source::Secure, Source::urandom()] {
            assert_eq!(entropy.int63n(1, &source).unwrap(), 0);
        }
    }

    #[test]
    fn fast_is_reproducible() {
        let (a, b) = (Entropy::with_seed(77), Entropy::with_seed(77));
        assert_eq!(
            a.bytes(33, &Source::Fast).unwrap(),
            b.bytes(33, &Source::Fast).unwrap()
        );
        assert_eq!(
            a.int63n(1000, &Source::Fast).unwrap(),
            b.int63n(1000, &Source::Fast).unwrap()
        );
    }

    #[test]
    fn reseed_restarts_fast_source() {
        let entropy = Entropy::with_seed(3);
        let first = entropy.int64_fast().unwrap();
        entropy.reseed(3);
        assert_eq!(entropy.int64_fast().unwrap(), first);
    }

    #[test]
    fn read_zero_is_empty() {
        let entropy = Entropy::with_seed(1);
        assert!(entropy.read(0, &Source::device("/nonexistent")).unwrap().is_empty());
    }

    #[test]
    fn int64_keeps_low_bits() {
        let path = std::env::temp_dir().join(format!("devrand-{}-int64", std::process::id()));
        let mut wide = [0u8; 64];
        wide[56..].copy_from_slice(&(-2i64).to_be_bytes());
        std::fs::write(&path, wide).unwrap();
        let entropy = Entropy::with_seed(1);
        assert_eq!(entropy.int64(&Source::device(&path)).unwrap(), -2);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn modulo_reduction_of_device_value() {
        let path = std::env::temp_dir().join(format!("devrand-{}-int63n", std::process::id()));
        std::fs::write(&path, i64::MIN.to_le_bytes()).unwrap();
        let entropy = Entropy::with_seed(1);
        let value = entropy.int63n(10, &Source::device(&path)).unwrap();
        assert_eq!(value, (i64::MIN % 10).abs());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn int64_variants() {
        let entropy = Entropy::new();
        entropy.int64_urandom().unwrap();
        entropy.int64_fast().unwrap();
        entropy.int64_secure().unwrap();
    }
}
