// Host management HTTP client
//
// Wraps `reqwest::Client` with endpoint URL construction, session header
// injection, and fault-envelope parsing. Endpoint groups (services,
// datetime, options, inventory) are implemented as inherent methods in
// separate files to keep this module focused on transport mechanics.

use std::sync::{PoisonError, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::FaultBody;
use crate::transport::TransportConfig;

/// Header carrying the session token on every authenticated request.
pub const SESSION_HEADER: &str = "vmware-api-session-id";

/// Raw HTTP client for a host management endpoint.
///
/// Every method is a single blocking round-trip from the caller's point of
/// view: no retries, no caching. Non-2xx answers are decoded from the
/// `{ faultType, message }` envelope into [`Error::Fault`].
pub struct HostClient {
    http: reqwest::Client,
    base_url: Url,
    session_id: RwLock<Option<String>>,
}

impl HostClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// The `base_url` is the endpoint root (e.g. `https://esxi01.lab`).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            session_id: RwLock::new(None),
        }
    }

    /// The underlying HTTP client (for auth flows that need direct access).
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The endpoint base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether a session token is currently held.
    pub fn is_logged_in(&self) -> bool {
        self.session_id
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    // ── Session token management ─────────────────────────────────────

    pub(crate) fn set_session(&self, token: Option<String>) {
        trace!(present = token.is_some(), "updating session token");
        *self
            .session_id
            .write()
            .unwrap_or_else(PoisonError::into_inner) = token;
    }

    pub(crate) fn current_session(&self) -> Option<String> {
        self.session_id
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn session(&self) -> Result<String, Error> {
        self.session_id
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(Error::NotLoggedIn)
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build `{base}/api/{path}`.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let full = format!(
            "{}/api/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(Url::parse(&full)?)
    }

    /// Build a host-scoped URL: `{base}/api/hosts/{host}/{path}`.
    pub(crate) fn host_url(&self, host: &str, path: &str) -> Result<Url, Error> {
        if path.is_empty() {
            return self.api_url(&format!("hosts/{host}"));
        }
        self.api_url(&format!("hosts/{host}/{path}"))
    }

    /// Build a host-scoped URL from raw segments, each percent-encoded
    /// on its own: `{base}/api/hosts/{host}/{segments...}`.
    pub(crate) fn host_segments_url(&self, host: &str, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.api_url("hosts")?;
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push(host)
            .extend(segments);
        Ok(url)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send an authenticated GET and decode the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .header(SESSION_HEADER, self.session()?)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::parse_json(resp).await
    }

    /// Send an authenticated POST with no body, discarding the response.
    pub(crate) async fn post_empty(&self, url: Url) -> Result<(), Error> {
        debug!("POST {}", url);
        let resp = self
            .http
            .post(url)
            .header(SESSION_HEADER, self.session()?)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::check_status(resp).await?;
        Ok(())
    }

    /// Send an authenticated PUT with a JSON body, discarding the response.
    pub(crate) async fn put(&self, url: Url, body: &impl Serialize) -> Result<(), Error> {
        debug!("PUT {}", url);
        let resp = self
            .http
            .put(url)
            .header(SESSION_HEADER, self.session()?)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::check_status(resp).await?;
        Ok(())
    }

    // ── Response handling ────────────────────────────────────────────

    /// Pass 2xx responses through; decode everything else into an error.
    pub(crate) async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: fault_message(&body)
                    .unwrap_or_else(|| "session expired or invalid credentials".into()),
            });
        }

        Err(parse_fault(status.as_u16(), &body))
    }

    async fn parse_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let resp = Self::check_status(resp).await?;
        let body = resp.text().await.map_err(Error::Transport)?;
        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}

/// Decode a fault envelope. Bodies that are not an envelope keep their
/// raw text as the message so nothing the host said is lost.
fn parse_fault(status: u16, body: &str) -> Error {
    match serde_json::from_str::<FaultBody>(body) {
        Ok(fault) => Error::Fault {
            fault: fault.fault_type.unwrap_or_else(|| "MethodFault".into()),
            message: fault.message.unwrap_or_else(|| format!("HTTP {status}")),
            status,
        },
        Err(_) => Error::Fault {
            fault: "MethodFault".into(),
            message: if body.is_empty() {
                format!("HTTP {status}")
            } else {
                body.to_owned()
            },
            status,
        },
    }
}

fn fault_message(body: &str) -> Option<String> {
    serde_json::from_str::<FaultBody>(body)
        .ok()
        .and_then(|f| f.message)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> HostClient {
        HostClient::with_client(reqwest::Client::new(), Url::parse(base).unwrap())
    }

    #[test]
    fn host_url_joins_segments() {
        let c = client("https://esxi01.lab/");
        let url = c.host_url("ha-host", "services").unwrap();
        assert_eq!(url.as_str(), "https://esxi01.lab/api/hosts/ha-host/services");
    }

    #[test]
    fn host_url_without_suffix() {
        let c = client("https://esxi01.lab:8443");
        let url = c.host_url("ha-host", "").unwrap();
        assert_eq!(url.as_str(), "https://esxi01.lab:8443/api/hosts/ha-host");
    }

    #[test]
    fn segments_are_escaped() {
        let c = client("https://esxi01.lab/");
        let url = c
            .host_segments_url("ha-host", &["services", "a/b?c#d", "policy"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://esxi01.lab/api/hosts/ha-host/services/a%2Fb%3Fc%23d/policy"
        );
        assert_eq!(
            c.host_segments_url("ha-host", &["services", "TSM-SSH"])
                .unwrap()
                .as_str(),
            "https://esxi01.lab/api/hosts/ha-host/services/TSM-SSH"
        );
    }

    #[test]
    fn fault_envelope_is_decoded() {
        let err = parse_fault(
            500,
            r#"{"faultType":"RuntimeFault","message":"service is busy"}"#,
        );
        match err {
            Error::Fault {
                fault,
                message,
                status,
            } => {
                assert_eq!(fault, "RuntimeFault");
                assert_eq!(message, "service is busy");
                assert_eq!(status, 500);
            }
            other => panic!("expected fault, got {other:?}"),
        }
    }

    #[test]
    fn non_envelope_body_is_kept_verbatim() {
        let err = parse_fault(502, "Bad Gateway");
        assert!(matches!(
            err,
            Error::Fault { ref fault, ref message, status: 502 }
                if fault == "MethodFault" && message == "Bad Gateway"
        ));
    }

    #[test]
    fn requests_require_session() {
        let c = client("https://esxi01.lab");
        assert!(!c.is_logged_in());
        assert!(matches!(c.session(), Err(Error::NotLoggedIn)));
    }
}
