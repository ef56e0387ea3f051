//! Ticket reference numbers.
//!
//! A reference is the human-facing ticket code: the `TIX` prefix followed by
//! five decimal digits (10000-99999). References are what QR codes encode and
//! what the confirmation and scanner lookups key on. Generation is random and
//! NOT unique by construction; the `uq_tickets_reference_number` constraint is
//! what actually rejects duplicates.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

/// Prefix shared by every ticket reference.
pub const REFERENCE_PREFIX: &str = "TIX";

static REFERENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^TIX\d{5}$").expect("valid regex"));

/// Generate a fresh candidate reference: `TIX` + five random digits.
pub fn generate_reference() -> String {
    let digits: u32 = rand::rng().random_range(10_000..=99_999);
    format!("{REFERENCE_PREFIX}{digits}")
}

/// Whether a scanned or user-supplied code has the reference shape.
pub fn is_reference(code: &str) -> bool {
    REFERENCE_PATTERN.is_match(code)
}
