// Session login / logout
//
// `POST /api/session` with basic auth returns the session token as a JSON
// string; it is stored on the client and sent in `vmware-api-session-id`
// on every later request.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::client::{HostClient, SESSION_HEADER};
use crate::error::Error;

impl HostClient {
    /// Authenticate with username/password and keep the session token.
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<(), Error> {
        let url = self.api_url("session")?;
        debug!("logging in at {}", url);

        let resp = self
            .http()
            .post(url)
            .basic_auth(username, Some(password.expose_secret()))
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("login failed (HTTP {status}): {body}"),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        let token: String =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: format!("unexpected session response: {e}"),
                body,
            })?;

        self.set_session(Some(token));
        debug!("login successful");
        Ok(())
    }

    /// End the current session. A no-op when not logged in.
    pub async fn logout(&self) -> Result<(), Error> {
        if !self.is_logged_in() {
            return Ok(());
        }

        let url = self.api_url("session")?;
        debug!("logging out at {}", url);

        let token = self.current_session();
        self.set_session(None);

        let resp = self
            .http()
            .delete(url)
            .header(SESSION_HEADER, token.unwrap_or_default())
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::check_status(resp).await?;

        debug!("logout complete");
        Ok(())
    }
}
