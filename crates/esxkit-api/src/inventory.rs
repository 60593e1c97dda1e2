// Read-only inventory endpoints
//
// Product, hardware, datastore, network, and storage blocks consumed by
// fact gathering. None of these mutate host state.

use tracing::debug;

use crate::client::HostClient;
use crate::error::Error;
use crate::models::{AboutInfo, DatastoreInfo, HardwareSummary, NetworkInfo, StorageInfo};

impl HostClient {
    /// Product identification (name, version, build, license strings).
    ///
    /// `GET /api/hosts/{host}/config/product`
    pub async fn get_product_info(&self, host: &str) -> Result<AboutInfo, Error> {
        let url = self.host_url(host, "config/product")?;
        debug!(host, "fetching product info");
        self.get(url).await
    }

    /// Hardware summary (vendor, CPU, memory).
    ///
    /// `GET /api/hosts/{host}/summary/hardware`
    pub async fn get_hardware_summary(&self, host: &str) -> Result<HardwareSummary, Error> {
        let url = self.host_url(host, "summary/hardware")?;
        debug!(host, "fetching hardware summary");
        self.get(url).await
    }

    /// Datastores attached to the host.
    ///
    /// `GET /api/hosts/{host}/datastores`
    pub async fn list_datastores(&self, host: &str) -> Result<Vec<DatastoreInfo>, Error> {
        let url = self.host_url(host, "datastores")?;
        debug!(host, "listing datastores");
        self.get(url).await
    }

    /// Network configuration: NICs, port groups, switches.
    ///
    /// `GET /api/hosts/{host}/network`
    pub async fn get_network_info(&self, host: &str) -> Result<NetworkInfo, Error> {
        let url = self.host_url(host, "network")?;
        debug!(host, "fetching network info");
        self.get(url).await
    }

    /// Storage devices, mounted volumes, and multipath state.
    ///
    /// `GET /api/hosts/{host}/storage`
    pub async fn get_storage_info(&self, host: &str) -> Result<StorageInfo, Error> {
        let url = self.host_url(host, "storage")?;
        debug!(host, "fetching storage info");
        self.get(url).await
    }
}
