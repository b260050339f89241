//! # Randomness
//!
//! Every random choice the generator makes goes through [`Dice`]: a fair coin
//! and a uniform index. Generation is correct for *any* sequence of draws, so
//! tests can drive it with scripted values while real runs use a seeded
//! [`StdRng`].

use rand::rngs::StdRng;
use rand::Rng;

/// A source of fair coin flips and uniform indices.
pub trait Dice {
    /// A fair coin.
    fn coin(&mut self) -> bool;

    /// A uniform index in `0..n`. `n` is never zero.
    fn below(&mut self, n: usize) -> usize;
}

impl Dice for StdRng {
    fn coin(&mut self) -> bool {
        self.random_bool(0.5)
    }

    fn below(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }
}

/// Fisher–Yates shuffle driven by `dice`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rust_dungeon::utils::dice::shuffle;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let mut items = [1, 2, 3, 4];
/// shuffle(&mut items, &mut rng);
/// items.sort();
/// assert_eq!(items, [1, 2, 3, 4]);
/// ```
pub fn shuffle<T, D: Dice + ?Sized>(items: &mut [T], dice: &mut D) {
    for i in (1..items.len()).rev() {
        let j = dice.below(i + 1);
        items.swap(i, j);
    }
}
