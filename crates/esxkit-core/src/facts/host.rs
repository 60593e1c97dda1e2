use esxkit_api::models::HardwareSummary;
use serde::Serialize;

use crate::humanize::bytes_to_human;

/// `hardware` category document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareFacts {
    #[serde(rename = "total_memory")]
    pub total_memory: String,
    pub vendor: Option<String>,
    pub model: Option<String>,
    pub uuid: Option<String>,
    pub cpu_model: Option<String>,
    pub cpu_mhz: Option<i32>,
    pub num_cpu_pkgs: Option<i16>,
    pub num_cpu_cores: Option<i16>,
    pub num_cpu_threads: Option<i16>,
    pub num_nics: Option<i32>,
    #[serde(rename = "numHBAs")]
    pub num_hbas: Option<i32>,
}

pub fn hardware_facts(summary: &HardwareSummary) -> HardwareFacts {
    HardwareFacts {
        total_memory: bytes_to_human(summary.memory_size),
        vendor: summary.vendor.clone(),
        model: summary.model.clone(),
        uuid: summary.uuid.clone(),
        cpu_model: summary.cpu_model.clone(),
        cpu_mhz: summary.cpu_mhz,
        num_cpu_pkgs: summary.num_cpu_pkgs,
        num_cpu_cores: summary.num_cpu_cores,
        num_cpu_threads: summary.num_cpu_threads,
        num_nics: summary.num_nics,
        num_hbas: summary.num_hbas,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn memory_is_humanized_and_keys_follow_host_naming() {
        let summary = HardwareSummary {
            vendor: Some("Dell Inc.".into()),
            model: Some("PowerEdge R640".into()),
            memory_size: 68_719_476_736,
            cpu_mhz: Some(2100),
            num_hbas: Some(2),
            ..HardwareSummary::default()
        };
        let value = serde_json::to_value(hardware_facts(&summary)).unwrap();
        assert_eq!(value["total_memory"], json!("64.00 GB"));
        assert_eq!(value["vendor"], json!("Dell Inc."));
        assert_eq!(value["cpuMhz"], json!(2100));
        assert_eq!(value["numHBAs"], json!(2));
        assert_eq!(value["uuid"], json!(null));
    }
}
