//! Shared configuration for esxkit.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext),
//! and translation to `esxkit_core::SessionConfig`. The CLI adds
//! `GlobalOpts`-aware flag overrides on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use esxkit_core::{Credentials, SessionConfig, TlsVerification};

/// Keyring service name; entries are keyed `{profile}/password`.
pub const KEYRING_SERVICE: &str = "esxkit";

/// Environment variable consulted before the keyring.
pub const PASSWORD_ENV: &str = "ESXKIT_PASSWORD";

/// Environment variable used when a profile has no username.
pub const USERNAME_ENV: &str = "ESXKIT_USERNAME";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("profile '{name}' not found in config")]
    ProfileNotFound { name: String },

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named host profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

/// A named host profile.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Management endpoint base URL (e.g., "https://esxi01.lab").
    pub endpoint: String,

    /// Login user.
    pub username: Option<String>,

    /// Password (plaintext -- prefer keyring or env var).
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout (seconds).
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "esxkit", "esxkit").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("esxkit");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file, layered over defaults and under `ESXKIT_`
/// environment overrides (`ESXKIT_DEFAULTS__TIMEOUT=60`).
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("ESXKIT_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(&config_path(), cfg)
}

pub fn save_config_to(path: &Path, cfg: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution (without CLI flags) ───────────────────────

/// Resolve the login user: profile value, then `ESXKIT_USERNAME`.
pub fn resolve_username(profile: &Profile, profile_name: &str) -> Result<String, ConfigError> {
    profile
        .username
        .clone()
        .or_else(|| std::env::var(USERNAME_ENV).ok())
        .ok_or_else(|| ConfigError::NoCredentials {
            profile: profile_name.into(),
        })
}

/// Resolve the password from the credential chain (no CLI flag step).
pub fn resolve_password(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Env var
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        return Ok(SecretString::from(pw));
    }

    // 2. Profile's password_env -> env var lookup
    if let Some(ref env_name) = profile.password_env {
        if let Ok(pw) = std::env::var(env_name) {
            return Ok(SecretString::from(pw));
        }
    }

    // 3. System keyring
    if let Ok(entry) = keyring_entry(profile_name) {
        if let Ok(pw) = entry.get_password() {
            return Ok(SecretString::from(pw));
        }
    }

    // 4. Plaintext in config
    if let Some(ref pw) = profile.password {
        return Ok(SecretString::from(pw.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Keyring entry holding a profile's password.
pub fn keyring_entry(profile_name: &str) -> Result<keyring::Entry, ConfigError> {
    Ok(keyring::Entry::new(
        KEYRING_SERVICE,
        &format!("{profile_name}/password"),
    )?)
}

/// TLS strategy for a profile: insecure wins, then a custom CA, then the
/// system store.
pub fn tls_for(profile: &Profile, insecure_override: bool) -> TlsVerification {
    if insecure_override || profile.insecure.unwrap_or(false) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    }
}

/// Parse and validate an endpoint URL.
pub fn parse_endpoint(raw: &str) -> Result<url::Url, ConfigError> {
    let url: url::Url = raw.parse().map_err(|_| ConfigError::Validation {
        field: "endpoint".into(),
        reason: format!("invalid URL: {raw}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            field: "endpoint".into(),
            reason: format!("expected an http(s) URL, got '{raw}'"),
        });
    }
    Ok(url)
}

/// Build a `SessionConfig` from a profile -- no CLI flag overrides.
pub fn profile_to_session_config(
    profile: &Profile,
    profile_name: &str,
) -> Result<SessionConfig, ConfigError> {
    let url = parse_endpoint(&profile.endpoint)?;
    let username = resolve_username(profile, profile_name)?;
    let password = resolve_password(profile, profile_name)?;

    Ok(SessionConfig {
        url,
        credentials: Credentials { username, password },
        tls: tls_for(profile, false),
        timeout: Duration::from_secs(profile.timeout.unwrap_or_else(default_timeout)),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;

    const SAMPLE: &str = r#"
default_profile = "lab"

[defaults]
timeout = 45

[profiles.lab]
endpoint = "https://esxi01.lab"
username = "root"
password = "hunter2"
password_env = "ESXKIT_TEST_UNSET_PASSWORD_VAR"
ca_cert = "/etc/ssl/lab-ca.pem"
"#;

    fn write_sample() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, SAMPLE).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_profiles_from_file() {
        let (_dir, path) = write_sample();
        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.default_profile.as_deref(), Some("lab"));
        assert_eq!(cfg.defaults.timeout, 45);
        assert!(!cfg.defaults.insecure);
        let lab = &cfg.profiles["lab"];
        assert_eq!(lab.endpoint, "https://esxi01.lab");
        assert_eq!(lab.username.as_deref(), Some("root"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.default_profile.as_deref(), Some("default"));
        assert!(cfg.profiles.is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[profiles.lab\nendpoint = 1\n").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Figment(_))));
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "default".into(),
            Profile {
                endpoint: "https://10.0.0.5".into(),
                username: Some("root".into()),
                insecure: Some(true),
                ..Profile::default()
            },
        );
        save_config_to(&path, &cfg).unwrap();

        let loaded = load_config_from(&path).unwrap();
        let profile = &loaded.profiles["default"];
        assert_eq!(profile.endpoint, "https://10.0.0.5");
        assert_eq!(profile.insecure, Some(true));
        assert_eq!(profile.password, None);
    }

    #[test]
    fn profile_translates_to_session_config() {
        let (_dir, path) = write_sample();
        let cfg = load_config_from(&path).unwrap();
        let session = profile_to_session_config(&cfg.profiles["lab"], "esxkit-test-lab").unwrap();
        assert_eq!(session.url.as_str(), "https://esxi01.lab/");
        assert_eq!(session.credentials.username, "root");
        assert_eq!(
            session.tls,
            TlsVerification::CustomCa(PathBuf::from("/etc/ssl/lab-ca.pem"))
        );
        assert_eq!(session.timeout, Duration::from_secs(30));
        if std::env::var(PASSWORD_ENV).is_err() {
            assert_eq!(session.credentials.password.expose_secret(), "hunter2");
        }
    }

    #[test]
    fn insecure_wins_over_ca_cert() {
        let profile = Profile {
            endpoint: "https://esxi01.lab".into(),
            ca_cert: Some("/etc/ssl/ca.pem".into()),
            ..Profile::default()
        };
        assert_eq!(tls_for(&profile, true), TlsVerification::DangerAcceptInvalid);
        assert_eq!(
            tls_for(&profile, false),
            TlsVerification::CustomCa("/etc/ssl/ca.pem".into())
        );
        assert_eq!(tls_for(&Profile::default(), false), TlsVerification::SystemDefaults);
    }

    #[test]
    fn endpoint_must_be_http_url() {
        assert!(parse_endpoint("https://esxi01.lab").is_ok());
        assert!(matches!(
            parse_endpoint("esxi01.lab"),
            Err(ConfigError::Validation { .. })
        ));
        assert!(matches!(
            parse_endpoint("ftp://esxi01.lab"),
            Err(ConfigError::Validation { .. })
        ));
    }
}
