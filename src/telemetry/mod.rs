//! Generation telemetry.
//!
//! # PRIVACY INVARIANT
//! Telemetry events must **NEVER** contain review text or business names.
//! Only counts and flags are allowed.
//!
//! Telemetry is observational. The generator never reads it back to decide
//! anything.

pub mod event;
pub mod metrics;
pub mod recorder;

pub use event::GenerationEvent;
pub use metrics::{compute_stats, GenerationStats};
pub use recorder::TelemetryRecorder;
