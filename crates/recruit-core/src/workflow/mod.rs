//! Pure workflow engine: status derivation, rejection-note parsing and the
//! four-stage timeline.
//!
//! Everything here is a total function over already-fetched data. No I/O,
//! no hidden state: calling any function twice with the same inputs yields
//! the same output. Fetching the inputs is the job of [`crate::tracker`].
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌────────────────────┐
//! │ Plan +       │───▶│ derive_plan_     │───▶│ build_workflow_    │
//! │ PlanMetadata │    │ status           │    │ timeline           │
//! └──────────────┘    └──────────────────┘    └────────────────────┘
//!                                                       ▲
//!                         parse_reject_annotation ──────┘
//! ```

pub mod actors;
pub mod annotation;
pub mod derive;
pub mod fallback;
pub mod timeline;

pub use actors::{approver_name, creator_name, rejecter_name, sender_name};
pub use annotation::{parse_reject_annotation, RejectAnnotation};
pub use derive::{derive_plan_status, has_reject_reason, resolve_handover_count};
pub use fallback::{Accessor, FallbackChain};
pub use timeline::build_workflow_timeline;
