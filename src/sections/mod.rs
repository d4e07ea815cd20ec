//! Password policy sections
//!
//! Each section checks one group of policy rules and reports every
//! violation it finds.

mod boundary;
mod dictionary;
mod forbidden;
mod length;
mod repetition;
mod variety;

pub use boundary::boundary_section;
pub use dictionary::dictionary_section;
pub use forbidden::forbidden_characters_section;
pub use length::length_section;
pub use repetition::repetition_section;
pub use variety::character_variety_section;

use crate::evaluation::PolicyViolation;

/// Violations found by a section. Empty when the section passed.
pub type SectionResult = Vec<PolicyViolation>;
