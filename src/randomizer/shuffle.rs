//! Fisher-Yates shuffle.

use crate::core::GameRng;

/// Return a uniformly random permutation of `values`.
///
/// Walks from the last position down to 1, swapping each position with a
/// uniformly drawn index in `[0, i]`. The input is left untouched.
///
/// ```
/// use papasko::core::GameRng;
/// use papasko::randomizer::fisher_yates;
///
/// let mut rng = GameRng::new(42);
/// let mut shuffled = fisher_yates(&[1, 2, 3, 4], &mut rng);
/// shuffled.sort();
/// assert_eq!(shuffled, vec![1, 2, 3, 4]);
/// ```
#[must_use]
pub fn fisher_yates<T: Clone>(values: &[T], rng: &mut GameRng) -> Vec<T> {
    let mut shuffled = values.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_index(i);
        shuffled.swap(i, j);
    }
    shuffled
}
