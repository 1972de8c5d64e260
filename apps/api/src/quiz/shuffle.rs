//! Fisher–Yates shuffling for per-request question order.

use rand::Rng;

use crate::quiz::questions::Question;

/// Uniform in-place permutation. Walks from the last index down, swapping each slot with a
/// uniformly drawn slot in `[0, i]`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Returns a shuffled copy of `bank`; the bank itself is left untouched.
pub fn shuffled_questions<R: Rng + ?Sized>(bank: &[Question], rng: &mut R) -> Vec<Question> {
    let mut questions = bank.to_vec();
    shuffle(&mut questions, rng);
    questions
}
