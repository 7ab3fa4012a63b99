use anyhow::{Context, Result};
use rustls::pki_types::CertificateDer;
use rustls::ServerConfig;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Builds a TLS server config from a single PEM file holding both the
/// certificate chain and the private key.
pub fn load_server_config(path: &Path) -> Result<ServerConfig> {
    let pem = fs::read(path)
        .with_context(|| format!("Failed to read certificate file: {}", path.display()))?;

    let certs = rustls_pemfile::certs(&mut pem.as_slice())
        .collect::<Result<Vec<CertificateDer<'static>>, _>>()
        .with_context(|| format!("Failed to parse certificates in {}", path.display()))?;
    if certs.is_empty() {
        anyhow::bail!("No certificate found in {}", path.display());
    }

    let key = rustls_pemfile::private_key(&mut pem.as_slice())
        .with_context(|| format!("Failed to parse private key in {}", path.display()))?
        .with_context(|| format!("No private key found in {}", path.display()))?;

    let config = ServerConfig::builder_with_provider(Arc::new(
        rustls::crypto::ring::default_provider(),
    ))
    .with_safe_default_protocol_versions()
    .context("Failed to select TLS protocol versions")?
    .with_no_client_auth()
    .with_single_cert(certs, key)
    .with_context(|| format!("Invalid certificate or key in {}", path.display()))?;

    Ok(config)
}
