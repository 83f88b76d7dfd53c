//! # datepoll-engine
//!
//! Availability aggregation and mutual-compatibility engine for group date polls.
//!
//! Participants rate each candidate date of an event as unavailable, evening only,
//! daytime only, or all day. The engine decides, per date, whether every pair of
//! participants who answered can actually meet, and pivots the answers into a
//! participant × date matrix for display. All evaluation is pure and deterministic:
//! the same snapshot always produces the same output.
//!
//! ## Quick start
//!
//! ```rust
//! use datepoll_engine::{evaluate, AvailabilityModel, Snapshot, Submission};
//!
//! let snapshot = Snapshot::new(
//!     ["2026-11-02"],
//!     vec![
//!         Submission::new("Alice").entry("2026-11-02", 3),
//!         Submission::new("Bob").entry("2026-11-02", 3),
//!     ],
//! );
//! let model = AvailabilityModel::from_snapshot(&snapshot).unwrap();
//! let result = evaluate(&model);
//! assert!(result[0].feasible);
//! ```
//!
//! ## Modules
//!
//! - [`status`]: `AvailabilityStatus` ranks and the `NoResponse` state
//! - [`snapshot`]: Raw snapshot payloads from the storage layer
//! - [`model`]: Validated, read-only `AvailabilityModel`
//! - [`compatibility`]: Pairwise `can_meet` and per-date feasibility
//! - [`pivot`]: Participant × date display matrix
//! - [`results`]: Per-date listing of answers and feasibility
//! - [`event`]: Event creation from a date range, replace-on-resubmit
//! - [`config`]: TOML-loadable engine limits
//! - [`error`]: Error types

pub mod compatibility;
pub mod config;
pub mod error;
pub mod event;
pub mod model;
pub mod pivot;
pub mod results;
pub mod snapshot;
pub mod status;

pub use compatibility::{can_meet, evaluate, feasible_dates, is_date_feasible, DateFeasibility};
pub use config::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use event::Event;
pub use model::AvailabilityModel;
pub use pivot::{pivot, PivotCell, PivotRow};
pub use results::{date_results, event_results, DateResponse, DateResult, EventResults};
pub use snapshot::{Snapshot, SubmittedEntry, Submission};
pub use status::{AvailabilityStatus, ResponseState};
