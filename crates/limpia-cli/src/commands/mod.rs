//! Command implementations.

pub mod clean;
pub mod datasets;
pub mod identity;
pub mod models;
pub mod status;
pub mod train;
pub mod upload;

use std::path::PathBuf;

use limpia::{
    BackendConfig, FileIdentityStore, HttpBackend, LimpiaError, Result, Session, Studio,
};

/// Resolve the identity file path: explicit flag, then ~/.limpia/identity.
pub fn identity_store(identity_file: Option<PathBuf>) -> Result<FileIdentityStore> {
    let path = match identity_file {
        Some(path) => path,
        None => dirs::home_dir()
            .ok_or_else(|| {
                LimpiaError::Config(
                    "could not resolve the home directory; pass --identity-file".to_string(),
                )
            })?
            .join(".limpia")
            .join("identity"),
    };
    Ok(FileIdentityStore::new(path))
}

/// Build a studio against the configured backend.
pub fn open_studio(api_url: Option<String>, identity_file: Option<PathBuf>) -> Result<Studio> {
    let config = match api_url {
        Some(url) => BackendConfig::default().with_base_url(url),
        None => BackendConfig::from_env(),
    };
    let store = identity_store(identity_file)?;
    let session = Session::obtain(&store)?;
    let backend = HttpBackend::new(config)?;
    Ok(Studio::new(Box::new(backend), session))
}
