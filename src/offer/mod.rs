//! Offer calculator.
//!
//! The offer is a pure function of the boxes: calling it never changes the
//! game, so views may recompute it as often as they like.

mod calculator;

pub use calculator::{compute_offer, floor_to_step, OFFER_STEP};
