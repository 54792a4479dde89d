/// A caller-owned source of uniformly distributed values in `[0, 1)`.
///
/// The library never seeds or stores a generator; random constructors borrow
/// one for the duration of the call.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

#[cfg(feature = "fastrand")]
impl RandomSource for fastrand::Rng {
    fn next_f64(&mut self) -> f64 {
        self.f64()
    }
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

/// Draws `len` values from `rng` in order.
pub(crate) fn draw<R: RandomSource + ?Sized>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.next_f64()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_source() {
        let mut next = 0.0;
        let mut source = || {
            next += 0.25;
            next
        };
        assert_eq!(draw(&mut source, 3), vec![0.25, 0.5, 0.75]);
    }

    #[cfg(feature = "fastrand")]
    #[test]
    fn test_fastrand_source_in_unit_interval() {
        let mut rng = fastrand::Rng::with_seed(7);
        for val in draw(&mut rng, 256) {
            assert!((0.0..1.0).contains(&val), "value {} outside [0, 1)", val);
        }
    }
}
