// ============================================================================
// Random Sampling
// Uniform currency amounts within closed bounds
// ============================================================================

use super::currency::Currency;
use super::errors::{CurrencyError, CurrencyResult};
use rand::Rng;

impl Currency {
    /// Uniformly sample an amount in `[lower, upper]` using the thread-local RNG.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `upper < lower`.
    pub fn random_between(lower: Currency, upper: Currency) -> CurrencyResult<Currency> {
        Self::random_between_with(&mut rand::thread_rng(), lower, upper)
    }

    /// Uniformly sample an amount in `[lower, upper]` from `rng`.
    ///
    /// Both bounds are inclusive. The offset is drawn with
    /// `Rng::gen_range(0..=span)`, rand's uniform sampler over a
    /// `RangeInclusive<u128>`. Equal bounds return `lower` without touching
    /// the RNG.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `upper < lower`.
    pub fn random_between_with<R: Rng + ?Sized>(
        rng: &mut R,
        lower: Currency,
        upper: Currency,
    ) -> CurrencyResult<Currency> {
        if upper < lower {
            tracing::debug!(%lower, %upper, "inverted bounds for random currency");
            return Err(CurrencyError::InvalidArgument);
        }
        if upper == lower {
            return Ok(lower);
        }

        // abs_diff fits in u128 even when the bounds straddle zero
        let span = upper.to_nano().abs_diff(lower.to_nano());
        let delta = rng.gen_range(0..=span);
        tracing::trace!(%lower, %upper, %delta, "sampled random currency");

        lower
            .to_nano()
            .checked_add_unsigned(delta)
            .map(Currency::from_nano)
            .ok_or(CurrencyError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// RNG that fails the test if it is ever consulted.
    struct UntouchedRng;

    impl RngCore for UntouchedRng {
        fn next_u32(&mut self) -> u32 {
            panic!("random source must not be used");
        }

        fn next_u64(&mut self) -> u64 {
            panic!("random source must not be used");
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("random source must not be used");
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            panic!("random source must not be used");
        }
    }

    #[test]
    fn test_equal_bounds_skip_rng() {
        let x = Currency::from_whole("3.25").unwrap();
        let sampled = Currency::random_between_with(&mut UntouchedRng, x, x).unwrap();
        assert_eq!(sampled, x);
    }

    #[test]
    fn test_inverted_bounds() {
        let lower = Currency::from_whole(2).unwrap();
        let upper = Currency::from_whole(1).unwrap();
        assert_eq!(
            Currency::random_between(lower, upper),
            Err(CurrencyError::InvalidArgument)
        );
    }

    #[test]
    fn test_samples_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let lower = Currency::from_whole("0.5").unwrap();
        let upper = Currency::from_whole(2).unwrap();

        for _ in 0..10_000 {
            let v = Currency::random_between_with(&mut rng, lower, upper).unwrap();
            assert!(lower <= v && v <= upper, "{} outside [{}, {}]", v, lower, upper);
        }
    }

    #[test]
    fn test_both_endpoints_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let lower = Currency::from_nano(10);
        let upper = Currency::from_nano(11);

        let mut seen_lower = false;
        let mut seen_upper = false;
        for _ in 0..1_000 {
            let v = Currency::random_between_with(&mut rng, lower, upper).unwrap();
            seen_lower |= v == lower;
            seen_upper |= v == upper;
        }
        assert!(seen_lower && seen_upper);
    }

    #[test]
    fn test_bounds_straddling_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let lower = Currency::from_nano(i128::MIN);
        let upper = Currency::from_nano(i128::MAX);

        for _ in 0..100 {
            assert!(Currency::random_between_with(&mut rng, lower, upper).is_ok());
        }
    }

    #[test]
    fn test_thread_rng_sampling() {
        let lower = Currency::ZERO;
        let upper = Currency::from_whole(1).unwrap();
        for _ in 0..100 {
            let v = Currency::random_between(lower, upper).unwrap();
            assert!(v >= lower && v <= upper);
        }
    }
}
