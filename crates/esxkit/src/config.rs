//! CLI configuration -- thin wrapper around `esxkit_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--endpoint, --username, etc.).

use std::time::Duration;

use secrecy::SecretString;

use esxkit_core::{Credentials, SessionConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use esxkit_config::{
    Config, Defaults, Profile, config_path, keyring_entry, load_config, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build the `SessionConfig` for this invocation.
///
/// Uses the active profile when one exists, otherwise the flags alone.
/// Flags win over profile values, profile values win over `[defaults]`.
pub fn build_session_config(global: &GlobalOpts) -> Result<SessionConfig, CliError> {
    // A missing file yields defaults; a broken one is reported.
    let cfg = load_config()?;
    let profile_name = active_profile_name(global, &cfg);

    if let Some(profile) = cfg.profiles.get(&profile_name) {
        return resolve_profile(profile, &profile_name, &cfg.defaults, global);
    }

    // An explicitly requested profile that doesn't exist is an error,
    // not a silent fallback to flags.
    if global.profile.is_some() {
        return Err(CliError::ProfileNotFound {
            name: profile_name,
            available: available_profiles(&cfg),
        });
    }

    let endpoint = global.endpoint.as_deref().ok_or_else(|| CliError::NoConfig {
        path: config_path().display().to_string(),
    })?;
    let url = esxkit_config::parse_endpoint(endpoint)?;

    let (Some(username), Some(password)) = (global.username.clone(), global.password.clone())
    else {
        return Err(CliError::NoCredentials {
            profile: profile_name,
        });
    };

    let tls = if global.insecure || cfg.defaults.insecure {
        TlsVerification::DangerAcceptInvalid
    } else {
        TlsVerification::SystemDefaults
    };

    Ok(SessionConfig {
        url,
        credentials: Credentials {
            username,
            password: SecretString::from(password),
        },
        tls,
        timeout: Duration::from_secs(global.timeout.unwrap_or(cfg.defaults.timeout)),
    })
}

/// Translate a `Profile` + global flags into a `SessionConfig`.
fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
    global: &GlobalOpts,
) -> Result<SessionConfig, CliError> {
    // 1. Endpoint (flag > env > profile)
    let endpoint = global.endpoint.as_deref().unwrap_or(&profile.endpoint);
    let url = esxkit_config::parse_endpoint(endpoint)?;

    // 2. Credentials (flag > shared resolution chain)
    let username = match global.username {
        Some(ref u) => u.clone(),
        None => esxkit_config::resolve_username(profile, profile_name)?,
    };
    let password = match global.password {
        Some(ref p) => SecretString::from(p.clone()),
        None => esxkit_config::resolve_password(profile, profile_name)?,
    };

    // 3. TLS verification
    let tls = esxkit_config::tls_for(profile, global.insecure || defaults.insecure);

    // 4. Timeout
    let timeout = global
        .timeout
        .or(profile.timeout)
        .unwrap_or(defaults.timeout);

    Ok(SessionConfig {
        url,
        credentials: Credentials { username, password },
        tls,
        timeout: Duration::from_secs(timeout),
    })
}

/// Comma-separated profile names for diagnostics.
pub fn available_profiles(cfg: &Config) -> String {
    let mut names: Vec<_> = cfg.profiles.keys().cloned().collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort();
    names.join(", ")
}
