//! Codemod rules for PatternFly major-version upgrades.

pub mod v5;
pub mod v6;
