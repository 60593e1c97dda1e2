// Service endpoints
//
// Host daemons (ntpd, TSM-SSH, ...) with their running flag and startup
// policy. Start/stop/restart are `?action=` POSTs on the service resource.

use tracing::debug;

use crate::client::HostClient;
use crate::error::Error;
use crate::models::{HostService, ServicePolicy};

impl HostClient {
    /// List every service known to the host.
    ///
    /// `GET /api/hosts/{host}/services`
    pub async fn list_services(&self, host: &str) -> Result<Vec<HostService>, Error> {
        let url = self.host_url(host, "services")?;
        debug!(host, "listing services");
        self.get(url).await
    }

    /// Start a service.
    ///
    /// `POST /api/hosts/{host}/services/{key}?action=start`
    pub async fn start_service(&self, host: &str, key: &str) -> Result<(), Error> {
        self.service_action(host, key, "start").await
    }

    /// Stop a service.
    ///
    /// `POST /api/hosts/{host}/services/{key}?action=stop`
    pub async fn stop_service(&self, host: &str, key: &str) -> Result<(), Error> {
        self.service_action(host, key, "stop").await
    }

    /// Restart a service.
    ///
    /// `POST /api/hosts/{host}/services/{key}?action=restart`
    pub async fn restart_service(&self, host: &str, key: &str) -> Result<(), Error> {
        self.service_action(host, key, "restart").await
    }

    /// Change a service's startup policy.
    ///
    /// `PUT /api/hosts/{host}/services/{key}/policy`
    pub async fn update_service_policy(
        &self,
        host: &str,
        key: &str,
        policy: ServicePolicy,
    ) -> Result<(), Error> {
        let url = self.host_segments_url(host, &["services", key, "policy"])?;
        debug!(host, key, policy = policy.as_str(), "updating service policy");
        let body = serde_json::json!({ "policy": policy.as_str() });
        self.put(url, &body).await
    }

    async fn service_action(&self, host: &str, key: &str, action: &str) -> Result<(), Error> {
        let mut url = self.host_segments_url(host, &["services", key])?;
        url.query_pairs_mut().append_pair("action", action);
        debug!(host, key, action, "service action");
        self.post_empty(url).await
    }
}
