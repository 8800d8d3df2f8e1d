// File: crates/slotbot_gcal/src/auth.rs
use google_calendar3::{
    hyper_rustls::{self, HttpsConnectorBuilder},
    hyper_util::client::legacy::connect::HttpConnector,
    hyper_util::client::legacy::Client,
    yup_oauth2::{read_service_account_key, ServiceAccountAuthenticator},
    CalendarHub,
};
use slotbot_config::GcalConfig;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

pub type HubType = CalendarHub<Connector>;

#[derive(Error, Debug)]
pub enum GcalAuthError {
    #[error("gcal.key_path is not configured")]
    MissingKeyPath,
    #[error("service account key not found at {}", .0.display())]
    KeyNotFound(PathBuf),
    #[error("failed to read service account key: {0}")]
    InvalidKey(#[source] io::Error),
    #[error("failed to build service account authenticator: {0}")]
    Authenticator(#[source] io::Error),
    #[error("failed to load native TLS roots: {0}")]
    TlsRoots(#[source] io::Error),
}

/// Resolves the configured service account key.
///
/// The authenticator only fetches a token on the first calendar call, so a wrong path
/// would otherwise surface on the first slash command instead of at start-up.
pub fn service_account_key_path(config: &GcalConfig) -> Result<&Path, GcalAuthError> {
    let key_path = config
        .key_path
        .as_deref()
        .filter(|path| !path.trim().is_empty())
        .map(Path::new)
        .ok_or(GcalAuthError::MissingKeyPath)?;

    if !key_path.is_file() {
        return Err(GcalAuthError::KeyNotFound(key_path.to_path_buf()));
    }
    Ok(key_path)
}

/// Builds an authenticated Calendar hub from the service account key file.
pub async fn create_calendar_hub(config: &GcalConfig) -> Result<HubType, GcalAuthError> {
    let key_path = service_account_key_path(config)?;
    info!("Using service account key {}", key_path.display());

    let sa_key = read_service_account_key(key_path)
        .await
        .map_err(GcalAuthError::InvalidKey)?;
    let auth = ServiceAccountAuthenticator::builder(sa_key)
        .build()
        .await
        .map_err(GcalAuthError::Authenticator)?;

    let https = HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(GcalAuthError::TlsRoots)?
        .https_or_http()
        .enable_http1()
        .build();
    let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);

    Ok(CalendarHub::new(client, auth))
}
