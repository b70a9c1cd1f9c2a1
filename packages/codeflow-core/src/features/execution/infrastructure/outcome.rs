//! Random outcome policy

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::features::execution::ports::OutcomePolicy;

/// Faults when a uniform `[0, 1)` draw falls below the threshold
#[derive(Debug, Clone)]
pub struct RandomOutcome {
    rng: StdRng,
    threshold: f64,
}

impl RandomOutcome {
    /// Seeded when `seed` is given, OS entropy otherwise
    pub fn new(threshold: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, threshold }
    }
}

impl OutcomePolicy for RandomOutcome {
    fn is_fault(&mut self) -> bool {
        self.rng.gen::<f64>() < self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_bounds() {
        let mut never = RandomOutcome::new(0.0, Some(1));
        let mut always = RandomOutcome::new(1.0, Some(1));
        for _ in 0..200 {
            assert!(!never.is_fault());
            assert!(always.is_fault());
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomOutcome::new(0.5, Some(42));
        let mut b = RandomOutcome::new(0.5, Some(42));
        let xs: Vec<bool> = (0..64).map(|_| a.is_fault()).collect();
        let ys: Vec<bool> = (0..64).map(|_| b.is_fault()).collect();
        assert_eq!(xs, ys);
    }
}
