//! RNG module - seeded card-deal shuffling
//!
//! Builds the duplicated identity deck for a board (each pair identity
//! exactly twice) and shuffles it with Fisher-Yates, so every permutation
//! of the deck is equally likely for a given RNG.
//!
//! The generator is a simple LCG seeded by the caller: the same seed always
//! deals the same board, which keeps games replayable and tests
//! deterministic.

use arrayvec::ArrayVec;

use memory_match_types::{CardIdentity, MAX_CARDS, MAX_PAIRS};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Deal a shuffled deck of paired identities
///
/// The deck contains each identity in `0..num_pairs` exactly twice, in a
/// random permutation drawn from `rng`. `num_pairs` must not exceed
/// [`MAX_PAIRS`].
///
/// This is stack-only and does not allocate.
pub fn pair_deck(num_pairs: usize, rng: &mut SimpleRng) -> ArrayVec<CardIdentity, MAX_CARDS> {
    debug_assert!(num_pairs <= MAX_PAIRS);

    let mut deck = ArrayVec::new();
    for pair in 0..num_pairs {
        deck.push(pair as CardIdentity);
        deck.push(pair as CardIdentity);
    }
    rng.shuffle(&mut deck);
    deck
}
