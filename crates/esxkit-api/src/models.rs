// Management endpoint wire types
//
// Field names follow the host API (camelCase). Anything the host may leave
// unset across ESXi releases is an `Option` or carries `#[serde(default)]`,
// so a missing sub-structure never fails deserialization of its siblings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Fault envelope ───────────────────────────────────────────────────

/// Body returned with every non-2xx response.
///
/// ```json
/// { "faultType": "RuntimeFault", "message": "..." }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaultBody {
    #[serde(default)]
    pub fault_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// ── Hosts ────────────────────────────────────────────────────────────

/// Entry from `GET /api/hosts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRef {
    /// Managed-object identifier (e.g. `ha-host`).
    pub host: String,
    pub name: String,
    #[serde(default)]
    pub connection_state: Option<String>,
}

// ── Services ─────────────────────────────────────────────────────────

/// Boot-time activation rule for a host service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServicePolicy {
    /// Start and stop with the host.
    On,
    /// Start and stop manually.
    Off,
    /// Start if any firewall port of the service is open.
    Automatic,
}

impl ServicePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Automatic => "automatic",
        }
    }
}

/// One entry of the host's service list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostService {
    pub key: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub uninstallable: bool,
    pub running: bool,
    pub policy: ServicePolicy,
    #[serde(default)]
    pub source_package: Option<String>,
}

// ── Date / time ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NtpConfig {
    #[serde(default)]
    pub server: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeZone {
    #[serde(default)]
    pub key: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub gmt_offset: Option<i32>,
}

/// Current date-time configuration from `GET /api/hosts/{h}/datetime`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeInfo {
    #[serde(default)]
    pub ntp_config: NtpConfig,
    pub time_zone: TimeZone,
}

/// Body for `PUT /api/hosts/{h}/datetime`.
///
/// Only the populated fields are applied by the host; each reconciliation
/// step submits exactly one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ntp_config: Option<NtpConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl DateTimeConfig {
    pub fn ntp_servers(servers: Vec<String>) -> Self {
        Self {
            ntp_config: Some(NtpConfig { server: servers }),
            time_zone: None,
        }
    }

    pub fn time_zone(name: impl Into<String>) -> Self {
        Self {
            ntp_config: None,
            time_zone: Some(name.into()),
        }
    }
}

// ── Advanced options ─────────────────────────────────────────────────

/// Runtime type of an advanced option value, as reported by the host.
///
/// Unknown type names are preserved in [`ValueKind::Other`] so callers can
/// report them instead of guessing a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ValueKind {
    Integer,
    String,
    Boolean,
    Other(String),
}

impl From<String> for ValueKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "long" | "int" | "integer" => Self::Integer,
            "string" | "str" => Self::String,
            "bool" | "boolean" => Self::Boolean,
            _ => Self::Other(name),
        }
    }
}

impl From<ValueKind> for String {
    fn from(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Integer => "long".into(),
            ValueKind::String => "string".into(),
            ValueKind::Boolean => "boolean".into(),
            ValueKind::Other(name) => name,
        }
    }
}

/// A value tagged with its runtime type: `{ "type": "long", "value": 1 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedValue {
    #[serde(rename = "type")]
    pub kind: ValueKind,
    pub value: serde_json::Value,
}

/// An advanced option as returned by `GET /api/hosts/{h}/advanced-options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionValue {
    pub key: String,
    pub value: TypedValue,
}

// ── Product / hardware ───────────────────────────────────────────────

/// Product identity block (`config.product`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutInfo {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub vendor: Option<String>,
    pub version: Option<String>,
    pub build: Option<String>,
    pub locale_version: Option<String>,
    pub locale_build: Option<String>,
    pub os_type: Option<String>,
    pub product_line_id: Option<String>,
    pub api_type: Option<String>,
    pub api_version: Option<String>,
    pub instance_uuid: Option<String>,
    pub license_product_name: Option<String>,
    pub license_product_version: Option<String>,
}

/// Hardware summary block (`summary.hardware`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareSummary {
    pub vendor: Option<String>,
    pub model: Option<String>,
    pub uuid: Option<String>,
    pub memory_size: u64,
    pub cpu_model: Option<String>,
    pub cpu_mhz: Option<i32>,
    pub num_cpu_pkgs: Option<i16>,
    pub num_cpu_cores: Option<i16>,
    pub num_cpu_threads: Option<i16>,
    pub num_nics: Option<i32>,
    #[serde(rename = "numHBAs")]
    pub num_hbas: Option<i32>,
}

// ── Datastores ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatastoreInfo {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub container_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    pub free_space: u64,
    pub max_file_size: u64,
    #[serde(default)]
    pub max_virtual_disk_capacity: Option<u64>,
}

// ── Network ──────────────────────────────────────────────────────────

/// Network configuration (`configManager.networkSystem.networkInfo`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    #[serde(default)]
    pub pnic: Vec<PhysicalNic>,
    #[serde(default)]
    pub vnic: Vec<VirtualNic>,
    #[serde(default)]
    pub portgroup: Vec<PortGroup>,
    #[serde(default)]
    pub proxy_switch: Vec<ProxySwitch>,
    #[serde(default)]
    pub vswitch: Vec<VirtualSwitch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalNic {
    pub device: String,
    #[serde(default)]
    pub driver: Option<String>,
    pub mac: String,
    #[serde(default)]
    pub pci: Option<String>,
    /// Unset when the link is down or the driver does not report it.
    #[serde(default)]
    pub link_speed: Option<LinkSpeed>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSpeed {
    #[serde(default)]
    pub speed_mb: Option<i32>,
    #[serde(default)]
    pub duplex: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualNic {
    pub device: String,
    #[serde(default)]
    pub portgroup: Option<String>,
    pub spec: VirtualNicSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualNicSpec {
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub mtu: Option<i32>,
    #[serde(default)]
    pub ip: IpConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpConfig {
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub subnet_mask: Option<String>,
    #[serde(default)]
    pub dhcp: bool,
    #[serde(default, rename = "ipV6Config")]
    pub ipv6_config: Option<Ipv6Config>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ipv6Config {
    #[serde(default, rename = "ipV6Address")]
    pub ipv6_address: Vec<Ipv6Address>,
    #[serde(default)]
    pub auto_configuration_enabled: Option<bool>,
    #[serde(default, rename = "dhcpV6Enabled")]
    pub dhcpv6_enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ipv6Address {
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub prefix_length: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortGroup {
    pub key: String,
    pub spec: PortGroupSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortGroupSpec {
    pub name: String,
    #[serde(default)]
    pub vlan_id: i32,
    pub vswitch_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxySwitch {
    pub key: String,
    #[serde(default)]
    pub dvs_name: Option<String>,
    #[serde(default)]
    pub dvs_uuid: Option<String>,
    #[serde(default)]
    pub num_ports: Option<i32>,
    #[serde(default)]
    pub config_num_ports: Option<i32>,
    #[serde(default)]
    pub num_ports_available: Option<i32>,
    #[serde(default)]
    pub mtu: Option<i32>,
    #[serde(default)]
    pub network_reservation_supported: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualSwitch {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub num_ports: Option<i32>,
    #[serde(default)]
    pub num_ports_available: Option<i32>,
    #[serde(default)]
    pub mtu: Option<i32>,
}

// ── Storage ──────────────────────────────────────────────────────────

/// Storage system state (`configManager.storageSystem`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageInfo {
    #[serde(default)]
    pub system_file: Vec<String>,
    #[serde(default)]
    pub storage_device_info: StorageDeviceInfo,
    #[serde(default)]
    pub file_system_volume_info: FileSystemVolumeInfo,
    #[serde(default)]
    pub multipath_state_info: MultipathStateInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageDeviceInfo {
    #[serde(default)]
    pub host_bus_adapter: Vec<HostBusAdapter>,
    #[serde(default)]
    pub scsi_lun: Vec<ScsiLun>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostBusAdapter {
    pub device: String,
    pub key: String,
    #[serde(default)]
    pub bus: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub driver: Option<String>,
    #[serde(default)]
    pub pci: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScsiLun {
    pub uuid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub lun_type: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub revision: Option<String>,
    #[serde(default)]
    pub scsi_level: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSystemVolumeInfo {
    #[serde(default)]
    pub volume_type_list: Vec<String>,
    #[serde(default)]
    pub mount_info: Vec<FileSystemMountInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSystemMountInfo {
    pub mount_info: MountInfo,
    pub volume: FileSystemVolume,
    #[serde(default)]
    pub v_storage_support: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountInfo {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub access_mode: Option<String>,
    #[serde(default)]
    pub mounted: Option<bool>,
    #[serde(default = "default_accessible")]
    pub accessible: bool,
    #[serde(default)]
    pub inaccessible_reason: Option<String>,
}

fn default_accessible() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSystemVolume {
    pub name: String,
    #[serde(default)]
    pub capacity: u64,
    #[serde(rename = "type")]
    pub volume_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MultipathStateInfo {
    #[serde(default)]
    pub path: Vec<MultipathPath>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipathPath {
    pub name: String,
    pub path_state: String,
}
