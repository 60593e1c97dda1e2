//! Clap derive structures for the `esxkit` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// esxkit -- idempotent host configuration for ESXi
#[derive(Debug, Parser)]
#[command(
    name = "esxkit",
    version,
    about = "Reconcile and inspect ESXi host configuration",
    long_about = "Reconcile services, NTP and timezone settings, and advanced options on an\n\
        ESXi host, or gather descriptive facts from it.\n\n\
        Every run prints a single report: {\"changed\": ...} on success,\n\
        {\"failed\": true, \"message\": ...} on failure.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Host profile to use
    #[arg(long, short = 'p', env = "ESXKIT_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Management endpoint URL (overrides profile)
    #[arg(long, short = 'e', env = "ESXKIT_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Login user (overrides profile)
    #[arg(long, short = 'u', env = "ESXKIT_USERNAME", global = true)]
    pub username: Option<String>,

    /// Login password
    #[arg(long, env = "ESXKIT_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Report format
    #[arg(
        long,
        short = 'o',
        env = "ESXKIT_OUTPUT",
        default_value = "json",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress the report on success
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "ESXKIT_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "ESXKIT_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ensure a host service's run state and startup policy
    #[command(alias = "svc")]
    Service(ServiceArgs),

    /// Ensure NTP servers, ntpd state, and timezone
    #[command(alias = "ntp")]
    Datetime(DatetimeArgs),

    /// Ensure the value of an advanced option
    #[command(alias = "option")]
    AdvancedSetting(AdvancedSettingArgs),

    /// Gather host facts
    Facts(FactsArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SERVICE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ServiceArgs {
    /// Service key (e.g. TSM-SSH, ntpd)
    #[arg(long, alias = "service")]
    pub name: String,

    /// Desired run state
    #[arg(long, value_enum, default_value = "running")]
    pub state: ServiceState,

    /// Desired startup policy
    #[arg(long, alias = "enabled", value_enum, default_value = "on")]
    pub policy: StartupPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServiceState {
    /// Start the service if it is stopped
    Running,
    /// Stop the service if it is running
    Stopped,
    /// Restart the service unconditionally
    Restarted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StartupPolicy {
    /// Start and stop with the host
    On,
    /// Start and stop manually
    Off,
    /// Start when a firewall port of the service is open
    Automatic,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DATETIME
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DatetimeArgs {
    /// NTP server, in order (repeat or comma-separate)
    #[arg(long = "ntp-server", required = true, value_delimiter = ',')]
    pub ntp_servers: Vec<String>,

    /// Desired ntpd run state
    #[arg(long, value_enum, default_value = "running")]
    pub ntpd_state: ServiceState,

    /// Timezone name (must be one the host advertises)
    #[arg(long)]
    pub timezone: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ADVANCED SETTING
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AdvancedSettingArgs {
    /// Option key, dotted or slash-delimited (e.g. /UserVars/SuppressShellWarning)
    #[arg(long, alias = "key")]
    pub option: String,

    /// Desired value; converted to the option's current type
    #[arg(long, allow_hyphen_values = true)]
    pub value: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  FACTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct FactsArgs {
    /// Categories to gather: all, system, hardware, network, storage, datastore
    #[arg(long, value_delimiter = ',', default_value = "all")]
    pub types: Vec<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration (secrets masked)
    Show,

    /// Set a value on the active profile
    Set {
        /// Profile field (endpoint, username, password_env, ca_cert, insecure, timeout)
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store a password in the system keyring
    SetPassword {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
