//! `httpsup fetch <url>` – perform an enforced GET.

use std::sync::Arc;

use anyhow::Result;
use httpsup_core::config::HttpsupConfig;
use httpsup_core::fetch::Fetch;
use httpsup_core::install::{install, ClientScopes};
use httpsup_core::policy::UpgradePolicy;
use httpsup_core::transport::CurlFetch;

pub async fn run_fetch(cfg: &HttpsupConfig, policy: UpgradePolicy, url: &str) -> Result<()> {
    let scopes = install(
        policy,
        ClientScopes {
            process: Arc::new(CurlFetch::from_config(cfg)),
            window: None,
            legacy: None,
        },
    );

    let resp = scopes.process.fetch(url.into(), None).await?;
    println!("HTTP {} ({} bytes)", resp.status, resp.body.len());
    Ok(())
}
