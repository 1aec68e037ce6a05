//! Response body handling shared by the provider endpoints.

use reqwest::Response;

use crate::core::YfError;

/// Reads a provider response body as text.
///
/// With the `test-mode` feature and `YF_RECORD=1` the body is also written to the
/// fixture directory as `{endpoint}_{symbol}.json`.
pub(crate) async fn read_body(
    resp: Response,
    endpoint: &str,
    symbol: &str,
) -> Result<String, YfError> {
    let body = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if std::env::var("YF_RECORD").as_deref() == Ok("1") {
            match record::write_fixture(endpoint, symbol, &body) {
                Ok(path) => tracing::debug!(path = %path.display(), "recorded fixture"),
                Err(e) => tracing::warn!(endpoint, symbol, error = %e, "failed to record fixture"),
            }
        }
    }
    #[cfg(not(feature = "test-mode"))]
    let _ = (endpoint, symbol);

    Ok(body)
}

#[cfg(feature = "test-mode")]
mod record {
    use std::fs;
    use std::path::{Path, PathBuf};

    /// `YF_FIXDIR`, or `tests/fixtures` under the crate root.
    fn fixture_dir() -> PathBuf {
        std::env::var_os("YF_FIXDIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
    }

    pub(super) fn write_fixture(
        endpoint: &str,
        symbol: &str,
        body: &str,
    ) -> std::io::Result<PathBuf> {
        let dir = fixture_dir();
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{endpoint}_{symbol}.json"));
        fs::write(&path, body)?;
        Ok(path)
    }
}
