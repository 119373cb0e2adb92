//! Curl-backed implementation of the async fetch entry point.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::HttpsupConfig;
use crate::fetch::{Fetch, FetchError, FetchResponse};
use crate::target::{FetchOptions, FetchTarget};

/// One curl `Easy` handle per call, performed on the blocking thread pool.
///
/// Follows redirects; performs no retries. Timeouts come from config (or the
/// per-call options bundle, which overrides the whole-transfer timeout).
#[derive(Debug, Clone)]
pub struct CurlFetch {
    connect_timeout: Duration,
    timeout: Duration,
}

impl Default for CurlFetch {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            timeout: Duration::from_secs(300),
        }
    }
}

impl CurlFetch {
    pub fn from_config(cfg: &HttpsupConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }
}

/// Plain request pieces extracted from a target and options bundle, movable
/// into the blocking task.
#[derive(Debug)]
struct WireRequest {
    url: String,
    method: String,
    headers: HashMap<String, String>,
    body: Option<Vec<u8>>,
    connect_timeout: Duration,
    timeout: Duration,
}

fn assemble(transport: &CurlFetch, target: FetchTarget, opts: Option<FetchOptions>) -> WireRequest {
    let (url, method, mut headers, body) = match target {
        FetchTarget::Str(s) => (s, "GET".to_string(), HashMap::new(), None),
        FetchTarget::Parsed(u) => (u.to_string(), "GET".to_string(), HashMap::new(), None),
        FetchTarget::Request(r) => (r.url, r.method, r.headers, r.body),
    };

    let mut timeout = transport.timeout;
    if let Some(opts) = opts {
        headers.extend(opts.headers);
        if let Some(d) = opts.timeout {
            timeout = d;
        }
    }

    WireRequest {
        url,
        method,
        headers,
        body,
        connect_timeout: transport.connect_timeout,
        timeout,
    }
}

fn perform(req: WireRequest) -> Result<FetchResponse, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(&req.url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(req.connect_timeout)?;
    easy.timeout(req.timeout)?;

    match req.method.to_ascii_uppercase().as_str() {
        "GET" => {}
        "HEAD" => easy.nobody(true)?,
        "POST" => easy.post(true)?,
        other => easy.custom_request(other)?,
    }
    if let Some(body) = &req.body {
        easy.post_fields_copy(body)?;
    }

    let mut list = curl::easy::List::new();
    for (k, v) in &req.headers {
        list.append(&format!("{}: {}", k.trim(), v.trim()))?;
    }
    if !req.headers.is_empty() {
        easy.http_headers(list)?;
    }

    super::run_transfer(&mut easy)
}

#[async_trait]
impl Fetch for CurlFetch {
    async fn fetch(
        &self,
        target: FetchTarget,
        opts: Option<FetchOptions>,
    ) -> Result<FetchResponse, FetchError> {
        let req = assemble(self, target, opts);
        tokio::task::spawn_blocking(move || perform(req))
            .await
            .map_err(|e| FetchError::Background(e.to_string()))?
    }
}
