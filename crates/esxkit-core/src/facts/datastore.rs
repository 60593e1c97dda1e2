use chrono::{DateTime, Utc};
use esxkit_api::models::DatastoreInfo;
use indexmap::IndexMap;
use serde::Serialize;

use crate::humanize::bytes_to_human;

/// Datastore name -> details.
pub type DatastoreFacts = IndexMap<String, DatastoreEntry>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatastoreEntry {
    pub url: String,
    pub container_id: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub free_space: String,
    pub max_file_size: String,
    pub max_virtual_disk_capacity: Option<String>,
}

pub fn datastore_facts(datastores: &[DatastoreInfo]) -> DatastoreFacts {
    datastores
        .iter()
        .map(|ds| {
            let entry = DatastoreEntry {
                url: ds.url.clone(),
                container_id: ds.container_id.clone(),
                timestamp: ds.timestamp,
                free_space: bytes_to_human(ds.free_space),
                max_file_size: bytes_to_human(ds.max_file_size),
                max_virtual_disk_capacity: ds.max_virtual_disk_capacity.map(bytes_to_human),
            };
            (ds.name.clone(), entry)
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn keyed_by_name_with_humanized_sizes() {
        let ds = DatastoreInfo {
            name: "datastore1".into(),
            url: "ds:///vmfs/volumes/5f1a/".into(),
            container_id: None,
            timestamp: None,
            free_space: 1_099_511_627_776,
            max_file_size: 68_719_476_736,
            max_virtual_disk_capacity: Some(68_719_476_736),
        };
        let value = serde_json::to_value(datastore_facts(&[ds])).unwrap();
        assert_eq!(
            value,
            json!({
                "datastore1": {
                    "url": "ds:///vmfs/volumes/5f1a/",
                    "containerId": null,
                    "timestamp": null,
                    "freeSpace": "1.00 TB",
                    "maxFileSize": "64.00 GB",
                    "maxVirtualDiskCapacity": "64.00 GB"
                }
            })
        );
    }
}
