use esxkit_api::models::DateTimeConfig;
use tracing::{debug, info};

use super::{RunState, apply_run_state, find_service};
use crate::error::CoreError;
use crate::session::HostHandle;

/// Key of the NTP daemon in the host's service list.
pub const NTPD_SERVICE: &str = "ntpd";

/// Desired NTP and timezone configuration.
#[derive(Debug, Clone)]
pub struct DateTimeSpec {
    /// Ordered NTP server list.
    pub ntp_servers: Vec<String>,
    pub ntpd_state: RunState,
    /// Leave the timezone alone when `None`.
    pub timezone: Option<String>,
}

/// Bring NTP servers, the ntpd run state, and the timezone to `spec`.
///
/// The NTP list is compared as an ordered sequence. Changing servers does
/// not restart ntpd. A requested timezone must appear in the host's list
/// of valid timezones, which is only fetched when the timezone differs.
pub async fn reconcile_datetime(host: &HostHandle, spec: &DateTimeSpec) -> Result<bool, CoreError> {
    let client = host.client();
    let info = client.get_date_time_info(host.id()).await?;
    let mut changed = false;

    // NTP servers
    if info.ntp_config.server == spec.ntp_servers {
        debug!(servers = ?spec.ntp_servers, "ntp servers already set");
    } else {
        info!(from = ?info.ntp_config.server, to = ?spec.ntp_servers, "updating ntp servers");
        client
            .update_date_time_config(
                host.id(),
                &DateTimeConfig::ntp_servers(spec.ntp_servers.clone()),
            )
            .await?;
        changed = true;
    }

    // ntpd
    let ntpd = find_service(host, NTPD_SERVICE).await?;
    changed |= apply_run_state(host, &ntpd, spec.ntpd_state).await?;

    // Timezone
    if let Some(wanted) = spec.timezone.as_deref() {
        if info.time_zone.name == wanted {
            debug!(timezone = wanted, "timezone already set");
        } else {
            let zones = client.query_available_time_zones(host.id()).await?;
            if !zones.iter().any(|z| z.name == wanted) {
                return Err(CoreError::InvalidTimezone {
                    name: wanted.into(),
                });
            }
            info!(from = %info.time_zone.name, to = wanted, "updating timezone");
            client
                .update_date_time_config(host.id(), &DateTimeConfig::time_zone(wanted))
                .await?;
            changed = true;
        }
    }

    Ok(changed)
}
