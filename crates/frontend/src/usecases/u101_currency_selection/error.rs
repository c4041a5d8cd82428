use thiserror::Error;

/// Failure to load one of the two currency catalogs.
///
/// Logged and swallowed by the page; never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogLoadFailure {
    #[error("request for {catalog} failed: {message}")]
    Transport {
        catalog: &'static str,
        message: String,
    },

    #[error("{catalog} responded with HTTP {status}")]
    Status { catalog: &'static str, status: u16 },

    #[error("{catalog} response could not be decoded: {message}")]
    Decode {
        catalog: &'static str,
        message: String,
    },
}

impl CatalogLoadFailure {
    pub fn catalog(&self) -> &'static str {
        match self {
            CatalogLoadFailure::Transport { catalog, .. }
            | CatalogLoadFailure::Status { catalog, .. }
            | CatalogLoadFailure::Decode { catalog, .. } => catalog,
        }
    }
}
