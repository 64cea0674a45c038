//! # Yearsketch Core Library
//!
//! Core logic for Yearsketch, a nine-question year-in-review that ends in a
//! shareable text report and an emoji-art rendering of the collected
//! answers. All state lives for one session and is discarded on restart.
//!
//! ## Architecture
//!
//! - **Session**: an explicitly owned controller composing the stage
//!   sequencer, the answer store, and the deferred-advance timer; hosts
//!   drive it with `tick()` -- no internal threads
//! - **Derivation rules**: pure per-question mappings from raw input to a
//!   typed answer record (keyword matching, energy scoring)
//! - **Generators**: report text, symbol pool, and shape-fill art, all
//!   deterministic over the aggregate answer record
//! - **Collaborators**: locale catalog, fire-and-forget analytics, export
//!   target chain
//!
//! ## Key Components
//!
//! - [`Session`]: session state machine
//! - [`AnswerSet`]: aggregate answer record
//! - [`generate_report`] / [`collect_symbols`] / [`art::generate_art`]
//! - [`AnalyticsClient`]: best-effort usage events

pub mod analytics;
pub mod answers;
pub mod art;
pub mod config;
pub mod defer;
pub mod error;
pub mod events;
pub mod export;
pub mod i18n;
pub mod questions;
pub mod report;
pub mod session;
pub mod stage;

pub use analytics::{AnalyticsClient, ClientInfo};
pub use answers::{Answer, AnswerSet, QuestionId};
pub use config::AppConfig;
pub use error::{ConfigError, CoreError, ExportError, Result, SessionError};
pub use events::{ResponseCue, SessionEvent};
pub use export::{ExportTarget, Exporter};
pub use i18n::{Catalog, Labels, Locale};
pub use report::{collect_symbols, generate_report};
pub use session::Session;
pub use stage::{Stage, StageSequencer};
