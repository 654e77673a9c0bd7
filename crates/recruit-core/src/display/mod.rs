//! Display formatting for plans, timelines and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and operation outcomes get small wrapper types. Everything renders to
//! markdown so the same text serves the terminal and MCP clients.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers        │    │   Formatted     │
//! │  (Plan, Step,   │───▶│ (Plans,         │───▶│    Output       │
//! │   PlanDetail)   │    │  ActionResult)  │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Plan lists and timelines
//! - [`results`]: Action and import outcomes
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use recruit_core::display::OperationStatus;
//!
//! let error = OperationStatus::failure("Plan 9 not found".to_string());
//! assert_eq!(error.to_string(), "Error: Plan 9 not found\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Plans, TimelineView};
pub use datetime::{LocalDate, LocalDateTime};
pub use results::{ActionResult, ImportResult, PlanAction};
pub use status::OperationStatus;
