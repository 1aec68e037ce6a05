//! Session handshake: a consent cookie first, then a crumb bound to it.

use reqwest::header::SET_COOKIE;

use super::YfClient;
use crate::core::YfError;

impl YfClient {
    /// Runs the handshake unless this client, or a clone of it, already holds a crumb.
    pub(crate) async fn ensure_credentials(&self) -> Result<(), YfError> {
        if self.crumb().await.is_some() {
            return Ok(());
        }

        let _guard = self.credential_fetch_lock.lock().await;
        if self.crumb().await.is_some() {
            return Ok(());
        }

        self.fetch_cookie().await?;
        let crumb = self.fetch_crumb().await?;
        *self.crumb.write().await = Some(crumb);

        tracing::debug!("provider crumb acquired");
        Ok(())
    }

    pub(crate) async fn crumb(&self) -> Option<String> {
        self.crumb.read().await.clone()
    }

    /// The consent endpoint answers 404 while still setting the cookie, so only the
    /// header is checked. The cookie itself is kept by the HTTP client's cookie store.
    async fn fetch_cookie(&self) -> Result<(), YfError> {
        let resp = self.http.get(self.cookie_url.clone()).send().await?;
        let header = resp.headers().get(SET_COOKIE).ok_or_else(|| {
            YfError::Auth(format!("no Set-Cookie header from {}", self.cookie_url))
        })?;
        header
            .to_str()
            .map_err(|_| YfError::Auth("Set-Cookie header is not valid text".into()))?;
        Ok(())
    }

    async fn fetch_crumb(&self) -> Result<String, YfError> {
        let body = self
            .send(self.http.get(self.crumb_url.clone()))
            .await?
            .text()
            .await?;
        checked_crumb(body)
    }
}

/// A crumb is a short opaque token; an error page in its place comes back as HTML or JSON.
fn checked_crumb(body: String) -> Result<String, YfError> {
    let crumb = body.trim();
    if crumb.is_empty() || crumb.contains(['{', '<']) {
        return Err(YfError::Auth(format!("received invalid crumb: {crumb:?}")));
    }
    Ok(crumb.to_string())
}
