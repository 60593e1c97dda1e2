// Advanced option endpoints
//
// Keys are dotted (`Config.HostAgent.log.level`). A query for an unknown
// key may answer with an empty list or with an `InvalidName` fault.

use tracing::debug;

use crate::client::HostClient;
use crate::error::Error;
use crate::models::OptionValue;

impl HostClient {
    /// Look up options matching `key`.
    ///
    /// `GET /api/hosts/{host}/advanced-options?key={key}`
    pub async fn query_options(&self, host: &str, key: &str) -> Result<Vec<OptionValue>, Error> {
        let mut url = self.host_url(host, "advanced-options")?;
        url.query_pairs_mut().append_pair("key", key);
        debug!(host, key, "querying advanced option");
        self.get(url).await
    }

    /// Write one or more options.
    ///
    /// `PUT /api/hosts/{host}/advanced-options`
    pub async fn update_options(&self, host: &str, options: &[OptionValue]) -> Result<(), Error> {
        let url = self.host_url(host, "advanced-options")?;
        debug!(host, count = options.len(), "updating advanced options");
        self.put(url, &options).await
    }
}
