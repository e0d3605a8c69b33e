//! Maintenance Report Form Model
//!
//! DOM-free state for the report form:
//! - rows: keyed arena for repeatable rows
//! - condition / correction: row types and their form encoding
//! - draft: the single state object the view renders from
//! - upload: image checks and preview tickets
//! - lifecycle / timer: submission phases and one-shot timer bookkeeping
//! - viewport: mobile and keyboard heuristics

pub mod condition;
pub mod config;
pub mod correction;
pub mod draft;
pub mod error;
pub mod lifecycle;
pub mod rows;
pub mod timer;
pub mod upload;
pub mod viewport;


pub use condition::{Condition, ConditionRow};
pub use config::{FormConfig, Labels};
pub use correction::CorrectionRow;
pub use draft::{GeneralField, GeneralInfo, ReportDraft};
pub use error::{ConfigError, FileRejection};
pub use lifecycle::{Phase, SubmissionLifecycle, SubmitDecision};
pub use rows::{RowArena, RowKey};
pub use timer::{Ticket, TimerGate};
pub use upload::{ImageMeta, PreviewTicket};
