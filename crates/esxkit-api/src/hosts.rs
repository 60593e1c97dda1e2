// Host enumeration
//
// A standalone host answers with exactly one entry; a management server
// may list several. Callers pick the first.

use tracing::debug;

use crate::client::HostClient;
use crate::error::Error;
use crate::models::HostRef;

impl HostClient {
    /// List hosts reachable through this endpoint.
    ///
    /// `GET /api/hosts`
    pub async fn list_hosts(&self) -> Result<Vec<HostRef>, Error> {
        let url = self.api_url("hosts")?;
        debug!("listing hosts");
        self.get(url).await
    }
}
