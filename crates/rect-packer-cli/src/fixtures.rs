use rand::{Rng, SeedableRng};
use rect_packer_core::Size;
use std::str::FromStr;

/// Side-length distribution for random fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    /// Sides drawn from 1, 2, 4, .. 64.
    Pow2,
    /// Sides drawn uniformly from `1..=max_side`.
    Uniform,
}

impl FromStr for Distribution {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pow2" => Ok(Self::Pow2),
            "uniform" => Ok(Self::Uniform),
            _ => Err(()),
        }
    }
}

const POW2_EXPONENTS: u32 = 7;

/// Generates `count` rectangle sizes from a seeded RNG.
pub fn generate(count: usize, dist: Distribution, max_side: u32, seed: u64) -> Vec<Size> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let max_side = max_side.max(1);
    (0..count)
        .map(|_| match dist {
            Distribution::Pow2 => Size::new(
                1 << rng.gen_range(0..POW2_EXPONENTS),
                1 << rng.gen_range(0..POW2_EXPONENTS),
            ),
            Distribution::Uniform => {
                Size::new(rng.gen_range(1..=max_side), rng.gen_range(1..=max_side))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pow2_sides_are_powers_of_two() {
        for s in generate(100, Distribution::Pow2, 0, 3) {
            assert!(s.w.is_power_of_two() && s.w <= 64);
            assert!(s.h.is_power_of_two() && s.h <= 64);
        }
    }

    #[test]
    fn uniform_respects_max_side_and_seed() {
        let a = generate(50, Distribution::Uniform, 9, 1);
        assert!(a.iter().all(|s| (1..=9).contains(&s.w) && (1..=9).contains(&s.h)));
        assert_eq!(a, generate(50, Distribution::Uniform, 9, 1));
    }

    #[test]
    fn parses_names() {
        assert_eq!("POW2".parse(), Ok(Distribution::Pow2));
        assert_eq!("uniform".parse(), Ok(Distribution::Uniform));
        assert!("gauss".parse::<Distribution>().is_err());
    }
}
