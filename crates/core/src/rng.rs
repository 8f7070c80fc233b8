use rand::{rngs::StdRng, seq::SliceRandom, RngCore, SeedableRng};

/// Seedable random source shared by every randomization pass. The same seed
/// reproduces the same draw sequence across all components.
#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

/// Uniform pick from a non-empty table.
pub(crate) fn pick<T: Copy>(items: &[T], rng: &mut RngState) -> T {
    items[(rng.next_u64() % items.len() as u64) as usize]
}

pub(crate) fn pick_range(min: i64, max: i64, rng: &mut RngState) -> i64 {
    if min >= max {
        return min;
    }
    let span = (max - min + 1) as u64;
    min + (rng.next_u64() % span) as i64
}

pub(crate) fn one_in(n: u64, rng: &mut RngState) -> bool {
    rng.next_u64() % n == 0
}
