//! Small pure helpers shared across the crate.

pub mod time_utils;

use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use regex::Regex;

use crate::constants::MOTIVATIONAL_QUOTES;

lazy_static! {
    /// Loose email shape check: something@something.something
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern");
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Pick a motivational quote for the dashboard.
pub fn random_quote() -> &'static str {
    MOTIVATIONAL_QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .expect("quote list is non-empty")
}
