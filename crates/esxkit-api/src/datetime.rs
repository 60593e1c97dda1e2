// Date/time endpoints

use tracing::debug;

use crate::client::HostClient;
use crate::error::Error;
use crate::models::{DateTimeConfig, DateTimeInfo, TimeZone};

impl HostClient {
    /// Current NTP configuration and time zone.
    ///
    /// `GET /api/hosts/{host}/datetime`
    pub async fn get_date_time_info(&self, host: &str) -> Result<DateTimeInfo, Error> {
        let url = self.host_url(host, "datetime")?;
        debug!(host, "fetching date/time info");
        self.get(url).await
    }

    /// Submit a partial date/time configuration. Fields left `None` are
    /// not touched by the host.
    ///
    /// `PUT /api/hosts/{host}/datetime`
    pub async fn update_date_time_config(
        &self,
        host: &str,
        config: &DateTimeConfig,
    ) -> Result<(), Error> {
        let url = self.host_url(host, "datetime")?;
        debug!(host, "updating date/time config");
        self.put(url, config).await
    }

    /// Time zones the host accepts.
    ///
    /// `GET /api/hosts/{host}/datetime/timezones`
    pub async fn query_available_time_zones(&self, host: &str) -> Result<Vec<TimeZone>, Error> {
        let url = self.host_url(host, "datetime/timezones")?;
        debug!(host, "listing time zones");
        self.get(url).await
    }
}
