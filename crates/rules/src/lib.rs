//! Sparse-checkout rule engine
//!
//! This crate turns pattern-file text into an ordered rule list and evaluates
//! working-tree paths against it:
//! - Per-line parsing with negation (`!`), directory-only (trailing `/`),
//!   wildcard and anchoring flags
//! - Dead-rule elimination for negations that cannot affect any earlier rule
//! - Leaf-to-root ancestor walk with reverse-order (last-declared-wins)
//!   scanning per directory level
//! - A mutex-guarded cache handing out immutable rule-set snapshots
//!
//! Wildcard matching itself is delegated to [`globset`]; this crate only
//! decides *which* text is matched against *which* rule, and in what order.

pub mod cache;
pub mod lookup;
pub mod rule;
pub mod ruleset;

// Re-exports
pub use cache::RuleCache;
pub use lookup::{CandidatePath, Decision, DirHint};
pub use rule::Rule;
pub use ruleset::RuleSet;
