//! Pattern matching and metadata merge.
//!
//! # Data Flow
//! ```text
//! Request path
//!     → router.rs (index lookup: exact map + prefix scan)
//!     → matcher.rs (evaluate each candidate pattern)
//!     → matching entry positions, ascending source order
//!     → merge metadata, later entries overwrite earlier keys
//!
//! Index Compilation (at construction):
//!     PatternEntry[]
//!     → exact patterns into a HashMap keyed by path
//!     → prefix patterns into a Vec scanned per query
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Index built once, immutable at runtime
//! - No regex in hot path (exact lookups and prefix tests only)
//! - Precedence is source order only; pattern specificity is ignored
//! - All matches contribute (no first-match-wins)

pub mod matcher;
pub mod router;
