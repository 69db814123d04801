//! Banker's offer computation.

use crate::boxes::GameBox;
use crate::core::Money;

/// Offers are always a whole multiple of this amount, rounded down.
pub const OFFER_STEP: f64 = 50.0;

/// Compute the banker's current offer.
///
/// Returns `None` until a contestant box is chosen, and once one box or fewer
/// remains closed. Otherwise the offer is the mean value of every closed box
/// (the contestant's included) floored to a multiple of `OFFER_STEP`.
///
/// ```
/// use papasko::offer::floor_to_step;
///
/// assert_eq!(floor_to_step(285.0), 250.0);
/// assert_eq!(floor_to_step(49.99), 0.0);
/// ```
#[must_use]
pub fn compute_offer(boxes: &[GameBox]) -> Option<Money> {
    if !boxes.iter().any(GameBox::is_contestant) {
        return None;
    }

    let (count, sum) = boxes
        .iter()
        .filter(|b| b.is_unopened())
        .fold((0usize, 0.0f64), |(count, sum), b| {
            (count + 1, sum + b.value().map_or(0.0, Money::amount))
        });

    if count <= 1 {
        return None;
    }

    Some(Money::new(floor_to_step(sum / count as f64)))
}

/// Floor an amount to the nearest lower multiple of `OFFER_STEP`.
#[must_use]
pub fn floor_to_step(amount: f64) -> f64 {
    (amount / OFFER_STEP).floor() * OFFER_STEP
}
