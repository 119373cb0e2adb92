//! Fetch seam and the enforcing decorator.
//!
//! `Fetch` is the explicit stand-in for what used to be an ambient entry
//! point: callers hold an `Arc<dyn Fetch>` instead of reaching for a global,
//! and the enforcement layer wraps that reference. `EnforcedFetch` runs the
//! target URL through the upgrade policy, rebuilds the target in its original
//! shape, and delegates; results and failures pass through untouched.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::policy::UpgradePolicy;
use crate::target::{FetchOptions, FetchTarget};

/// Failure surfaced by a `Fetch` implementation.
///
/// The enforcement decorator never constructs one of these itself; whatever
/// the wrapped entry point produced is what the caller sees.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, TLS, bad URL).
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),
    /// The blocking transfer task was cancelled or panicked.
    #[error("transfer task failed: {0}")]
    Background(String),
    /// Failure raised by an entry-point implementation itself (lifecycle
    /// misuse, non-curl transports).
    #[error("{0}")]
    Upstream(String),
}

/// Response from a `Fetch` implementation.
///
/// Header names are lowercased on collection so lookups do not depend on the
/// server's casing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchResponse {
    pub status: u32,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

/// A network-fetch entry point.
///
/// Implemented by the concrete transport and by `EnforcedFetch` itself, so an
/// enforced client is a drop-in replacement wherever the original was used.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Issues the request described by `target`, with `opts` forwarded as the
    /// caller built it.
    async fn fetch(
        &self,
        target: FetchTarget,
        opts: Option<FetchOptions>,
    ) -> Result<FetchResponse, FetchError>;
}

/// Decorator that upgrades plaintext URLs before delegating to the wrapped
/// entry point.
///
/// The inner reference is captured at construction and never swapped; every
/// call site holding this wrapper observes the enforced behavior.
#[derive(Clone)]
pub struct EnforcedFetch {
    inner: Arc<dyn Fetch>,
    policy: UpgradePolicy,
}

impl EnforcedFetch {
    pub fn new(inner: Arc<dyn Fetch>, policy: UpgradePolicy) -> Self {
        Self { inner, policy }
    }

    /// The wrapped entry point.
    pub fn inner(&self) -> &Arc<dyn Fetch> {
        &self.inner
    }
}

#[async_trait]
impl Fetch for EnforcedFetch {
    async fn fetch(
        &self,
        target: FetchTarget,
        opts: Option<FetchOptions>,
    ) -> Result<FetchResponse, FetchError> {
        let enforced = self.policy.enforce(target.url_str());
        let target = if enforced == target.url_str() {
            target
        } else {
            target.with_url(&enforced)
        };
        self.inner.fetch(target, opts).await
    }
}
