//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! sheet parsing, index build, queries produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters and gauges via the metrics facade)
//!
//! Consumers:
//!     → the binary installs a fmt subscriber
//!     → embedding applications install their own recorder/subscriber
//! ```
//!
//! # Design Decisions
//! - The library never installs a global subscriber or recorder
//! - Metric calls without a recorder are no-ops

pub mod logging;
pub mod metrics;
