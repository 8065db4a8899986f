use std::{
    cell::Cell,
    ops::{Bound, RangeBounds},
};

/// The increment used to advance the Weyl sequence. It is coprime to 2^64 and `INCREMENT / 2^64`
/// is approximately `phi - 1`, which gives a low discrepancy sequence with a period of 2^64.
pub(crate) const INCREMENT: u64 = 0x9E3779B97F4A7FFF;

// Like `INCREMENT`, these are coprime to 2^64.
const ALPHA: u128 = 0x11F9ADBB8F8DA6FFF;
const BETA: u128 = 0x1E3DF208C6781EFFF;

#[derive(Debug)]
/// The fast, non-cryptographic generator behind [`Source::Fast`](crate::Source::Fast).
///
/// The generator hashes a Weyl sequence with a `wyhash` style mixer. Its output is fully
/// determined by the seed, so it must never be used where unpredictability matters.
///
/// The state lives in a `Cell`: the generator can be advanced through a shared reference, but
/// it is not `Sync`. Threads that want to share one instance have to wrap it in their own lock.
pub struct FastRng {
    /// The current state of the RNG.
    pub(crate) state: Cell<u64>,
}

impl FastRng {
    /// Returns a value of type `T` in the given range.
    ///
    /// # Panics
    /// Panics if the range is empty.
    ///
    /// # Example
    /// ```
    /// # use devrand::FastRng;
    /// let rng = FastRng::new(7);
    /// let value: i64 = rng.bounded(0..10);
    /// assert!((0..10).contains(&value));
    /// ```
    pub fn bounded<T, R>(&self, range: R) -> T
    where
        T: RandomRange<Self>,
        R: RangeBounds<T>,
    {
        T::random_range(self, range)
    }

    /// Fills `data` with random bytes. Every byte covers the full `0..=255` range.
    pub fn bytes(&self, data: &mut [u8]) {
        for chunk in data.chunks_mut(std::mem::size_of::<u64>()) {
            let bytes = self.u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    /// Creates a generator with the given `seed`. Equal seeds yield equal sequences.
    ///
    /// # Example
    /// ```
    /// # use devrand::FastRng;
    /// let (a, b) = (FastRng::new(1234), FastRng::new(1234));
    /// assert_eq!(a.random::<u64>(), b.random::<u64>());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            state: Cell::new(seed),
        }
    }

    /// Returns a random value of type `T` covering the whole domain of `T`.
    pub fn random<T>(&self) -> T
    where
        T: Random<Self>,
    {
        T::random(self)
    }

    /// Restarts the sequence from `seed`.
    pub fn reseed(&self, seed: u64) {
        self.state.set(seed);
    }

    /// Returns the next `u64` value from the pseudorandom sequence.
    pub(crate) fn u64(&self) -> u64 {
        let old_state = self.state.get();
        self.state.set(old_state.wrapping_add(INCREMENT));
        mix(old_state)
    }
}

#[inline]
fn mix(value: u64) -> u64 {
    let mut tmp = (value as u128).wrapping_mul(ALPHA);
    tmp ^= tmp >> 64;
    tmp = tmp.wrapping_mul(BETA);
    ((tmp >> 64) ^ tmp) as _
}

/// A generator of values of type `T`.
pub trait Generator<T> {
    /// Generates a value of type `T`.
    fn generate(&self) -> T;
}

impl Generator<u64> for FastRng {
    fn generate(&self) -> u64 {
        self.u64()
    }
}

/// A type whose values can be drawn uniformly from a generator.
pub trait Random<G> {
    fn random(generator: &G) -> Self;
}

/// A type whose values can be drawn uniformly from a range using a generator.
pub trait RandomRange<G> {
    fn random_range<R>(generator: &G, range: R) -> Self
    where
        R: RangeBounds<Self>;
}

impl<G> Random<G> for u64
where
    G: Generator<u64>,
{
    fn random(generator: &G) -> Self {
        generator.generate()
    }
}

impl<G> RandomRange<G> for u64
where
    G: Generator<u64>,
{
    /// Lemire's multiply-shift reduction with rejection of the biased low products.
    fn random_range<R>(generator: &G, range: R) -> Self
    where
        R: RangeBounds<Self>,
    {
        let low = match range.start_bound() {
            Bound::Included(&low) => low,
            Bound::Excluded(&low) => low.saturating_add(1),
            Bound::Unbounded => 0,
        };

        assert!(
            range.contains(&low),
            "cannot generate a value from an empty range"
        );
        let width = match range.end_bound() {
            Bound::Included(&high) => (high - low).checked_add(1),
            Bound::Excluded(&high) => Some(high - low),
            Bound::Unbounded => (u64::MAX - low).checked_add(1),
        };
        let Some(width) = width else {
            return generator.generate();
        };

        let mut m = (generator.generate() as u128) * (width as u128);
        if (m as u64) < width {
            let threshold = width.wrapping_neg() % width;
            while (m as u64) < threshold {
                m = (generator.generate() as u128) * (width as u128);
            }
        }
        (m >> u64::BITS) as u64 + low
    }
}

impl<G> RandomRange<G> for i64
where
    G: Generator<u64>,
{
    fn random_range<R>(generator: &G, range: R) -> Self
    where
        R: RangeBounds<Self>,
    {
        let low = match range.start_bound() {
            Bound::Included(&low) => low,
            Bound::Excluded(&low) => low.saturating_add(1),
            Bound::Unbounded => i64::MIN,
        };

        assert!(
            range.contains(&low),
            "cannot generate a value from an empty range"
        );
        let width = match range.end_bound() {
            Bound::Included(&high) => high.abs_diff(low).checked_add(1),
            Bound::Excluded(&high) => Some(high.abs_diff(low)),
            Bound::Unbounded => i64::MAX.abs_diff(low).checked_add(1),
        };
        let Some(width) = width else {
            return generator.generate() as _;
        };

        let x = u64::random_range(generator, 0..width);
        low.wrapping_add_unsigned(x)
    }
}

impl<G> RandomRange<G> for usize
where
    G: Generator<u64>,
{
    fn random_range<R>(generator: &G, range: R) -> Self
    where
        R: RangeBounds<Self>,
    {
        let start = range.start_bound().map(|&x| x as u64);
        let end = range.end_bound().map(|&x| x as u64);
        u64::random_range(generator, (start, end)) as _
    }
}
