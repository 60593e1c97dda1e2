use esxkit_api::models::StorageInfo;
use indexmap::IndexMap;
use serde::Serialize;

use crate::humanize::bytes_to_human;

/// `storage` category document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StorageFacts {
    pub hba: IndexMap<String, HbaFacts>,
    pub lun: IndexMap<String, LunFacts>,
    pub mountinfo: IndexMap<String, MountFacts>,
    /// Path name -> path state.
    pub multipath: IndexMap<String, String>,
    pub systemfile: Vec<String>,
    #[serde(rename = "volumeTypeList")]
    pub volume_type_list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HbaFacts {
    pub key: String,
    pub bus: Option<i32>,
    pub status: Option<String>,
    pub model: Option<String>,
    pub driver: Option<String>,
    pub pci: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LunFacts {
    pub display_name: Option<String>,
    pub lun_type: Option<String>,
    pub vendor: Option<String>,
    pub revision: Option<String>,
    pub scsi_level: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MountFacts {
    pub capacity: String,
    #[serde(rename = "type")]
    pub volume_type: String,
    pub v_storage_support: Option<String>,
    pub path: Option<String>,
    pub access_mode: Option<String>,
    pub mounted: Option<bool>,
    pub accessible: bool,
    /// Only reported for inaccessible volumes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inaccessible_reason: Option<String>,
}

pub fn storage_facts(info: &StorageInfo) -> StorageFacts {
    let devices = &info.storage_device_info;
    let volumes = &info.file_system_volume_info;

    let hba = devices
        .host_bus_adapter
        .iter()
        .map(|a| {
            let facts = HbaFacts {
                key: a.key.clone(),
                bus: a.bus,
                status: a.status.clone(),
                model: a.model.clone(),
                driver: a.driver.clone(),
                pci: a.pci.clone(),
            };
            (a.device.clone(), facts)
        })
        .collect();

    let lun = devices
        .scsi_lun
        .iter()
        .map(|l| {
            let facts = LunFacts {
                display_name: l.display_name.clone(),
                lun_type: l.lun_type.clone(),
                vendor: l.vendor.clone(),
                revision: l.revision.clone(),
                scsi_level: l.scsi_level,
            };
            (l.uuid.clone(), facts)
        })
        .collect();

    let mountinfo = volumes
        .mount_info
        .iter()
        .map(|m| {
            let accessible = m.mount_info.accessible;
            let facts = MountFacts {
                capacity: bytes_to_human(m.volume.capacity),
                volume_type: m.volume.volume_type.clone(),
                v_storage_support: m.v_storage_support.clone(),
                path: m.mount_info.path.clone(),
                access_mode: m.mount_info.access_mode.clone(),
                mounted: m.mount_info.mounted,
                accessible,
                inaccessible_reason: if accessible {
                    None
                } else {
                    Some(m.mount_info.inaccessible_reason.clone().unwrap_or_default())
                },
            };
            (m.volume.name.clone(), facts)
        })
        .collect();

    let multipath = info
        .multipath_state_info
        .path
        .iter()
        .map(|p| (p.name.clone(), p.path_state.clone()))
        .collect();

    StorageFacts {
        hba,
        lun,
        mountinfo,
        multipath,
        systemfile: info.system_file.clone(),
        volume_type_list: volumes.volume_type_list.clone(),
    }
}
