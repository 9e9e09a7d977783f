/// Built-in template banks, embedded at compile time.

use crate::core::bank::{BankError, TemplateBank};

/// Raw RON for the classic demo catalogue: poem, explanation, story, and
/// summary triggers plus a generic fallback.
pub const CLASSIC_DEMO: &str = include_str!("../bank_data/classic_demo.ron");

/// Parse the classic demo catalogue.
pub fn classic_demo() -> Result<TemplateBank, BankError> {
    TemplateBank::parse_ron(CLASSIC_DEMO)
}
