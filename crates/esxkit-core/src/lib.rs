// esxkit-core: Reconcilers and fact gathering between esxkit-api and the CLI.

pub mod coerce;
pub mod config;
pub mod error;
pub mod facts;
pub mod humanize;
pub mod reconcile;
pub mod report;
pub mod session;

// ── Primary re-exports ──────────────────────────────────────────────
pub use coerce::{Coercion, coerce, normalize_option_key};
pub use config::{Credentials, SessionConfig, TlsVerification};
pub use error::CoreError;
pub use facts::{FactDocument, FactSelection, gather};
pub use humanize::bytes_to_human;
pub use reconcile::{
    DateTimeSpec, OptionSpec, RunState, ServiceSpec, reconcile_datetime, reconcile_option,
    reconcile_service,
};
pub use report::Report;
pub use session::HostHandle;

// Wire types callers need to build specs.
pub use esxkit_api::models::ServicePolicy;
