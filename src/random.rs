use rand::{rngs::StdRng, RngCore, SeedableRng};

/// Where CXNN gets its random bytes from
pub trait RandomSource {
    fn next_byte(&mut self) -> u8;
}

/// uniform bytes from a seedable PRNG
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        SeededRandom { rng }
    }
}

impl RandomSource for SeededRandom {
    fn next_byte(&mut self) -> u8 {
        (self.rng.next_u32() & 0xff) as u8
    }
}

/// hands out the same bytes over and over; useful for testing
pub struct FixedRandom {
    bytes: Vec<u8>,
    next: usize,
}

impl FixedRandom {
    pub fn new(bytes: &[u8]) -> Self {
        assert!(!bytes.is_empty(), "FixedRandom needs at least one byte");
        FixedRandom {
            bytes: Vec::from(bytes),
            next: 0,
        }
    }
}

impl RandomSource for FixedRandom {
    fn next_byte(&mut self) -> u8 {
        let b = self.bytes[self.next];
        self.next = (self.next + 1) % self.bytes.len();
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_repeatable() {
        let mut a = SeededRandom::new(Some(42));
        let mut b = SeededRandom::new(Some(42));
        let xs: Vec<u8> = (0..32).map(|_| a.next_byte()).collect();
        let ys: Vec<u8> = (0..32).map(|_| b.next_byte()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_fixed_cycles() {
        let mut r = FixedRandom::new(&[1, 2, 3]);
        let xs: Vec<u8> = (0..5).map(|_| r.next_byte()).collect();
        assert_eq!(xs, [1, 2, 3, 1, 2]);
    }

    #[test]
    #[should_panic]
    fn test_fixed_rejects_empty() {
        let _ = FixedRandom::new(&[]);
    }
}
