use thiserror::Error;

/// Top-level error type for the `esxkit-api` crate.
///
/// Covers every failure mode of the management endpoint: authentication,
/// transport, faults raised by the host, and malformed payloads.
/// `esxkit-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login failed (wrong credentials, account locked, etc.)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// A request was issued before `login()` succeeded.
    #[error("No active session -- login required")]
    NotLoggedIn,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Host faults ─────────────────────────────────────────────────
    /// Fault raised by the management endpoint while executing a call.
    ///
    /// `fault` is the fault type reported by the host (`RuntimeFault`,
    /// `MethodFault`, or one of their subtypes such as `NotFound`).
    #[error("{fault}: {message}")]
    Fault {
        fault: String,
        message: String,
        status: u16,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}
