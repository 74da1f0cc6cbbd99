//! Download URL construction.

use url::Url;

use crate::error::FetchError;

/// Build the download URL for `filename` under `directory` on `domain`.
///
/// An empty filename yields the directory URL itself (the listing page).
/// The joined path is resolved against the domain with standard URL-join
/// semantics, so a domain carrying its own path behaves like a base URL.
pub fn resolve_url(filename: &str, domain: &str, directory: &str) -> Result<Url, FetchError> {
    let path = if filename.is_empty() {
        directory.to_string()
    } else {
        format!("{directory}/{filename}")
    };
    let base = Url::parse(domain).map_err(|source| FetchError::Url {
        domain: domain.to_string(),
        path: path.clone(),
        source,
    })?;
    base.join(&path).map_err(|source| FetchError::Url {
        domain: domain.to_string(),
        path,
        source,
    })
}
