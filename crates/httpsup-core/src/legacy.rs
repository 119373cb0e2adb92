//! Legacy request-object API and its enforcing decorator.
//!
//! The older request lifecycle is two-phase: `open` stakes method, URL, and
//! trailing configuration onto a handle, then `send` performs the transfer.
//! `EnforcedOpen` rewrites only the URL handed to `open`; the method, the
//! trailing arguments, and everything about `send` pass through verbatim.

use crate::fetch::{FetchError, FetchResponse};
use crate::policy::UpgradePolicy;

/// Trailing configuration arguments of an `open` call, forwarded unchanged in
/// original order and count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenArgs {
    /// Whether the request should be performed asynchronously.
    pub async_flag: bool,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl OpenArgs {
    pub fn asynchronous() -> Self {
        Self {
            async_flag: true,
            ..Default::default()
        }
    }
}

/// Older request-lifecycle entry point: configure with `open`, then perform
/// with `send`.
pub trait OpenRequest {
    /// Stakes method, URL, and trailing configuration onto the request.
    fn open(&mut self, method: &str, url: &str, args: &OpenArgs) -> Result<(), FetchError>;

    /// Performs the configured request.
    fn send(&mut self, body: Option<&[u8]>) -> Result<FetchResponse, FetchError>;
}

impl<T: OpenRequest + ?Sized> OpenRequest for Box<T> {
    fn open(&mut self, method: &str, url: &str, args: &OpenArgs) -> Result<(), FetchError> {
        (**self).open(method, url, args)
    }

    fn send(&mut self, body: Option<&[u8]>) -> Result<FetchResponse, FetchError> {
        (**self).send(body)
    }
}

/// Decorator that upgrades the URL handed to `open`, delegating everything
/// else to the wrapped handle untouched.
pub struct EnforcedOpen<H: OpenRequest> {
    inner: H,
    policy: UpgradePolicy,
}

impl<H: OpenRequest> EnforcedOpen<H> {
    pub fn new(inner: H, policy: UpgradePolicy) -> Self {
        Self { inner, policy }
    }

    /// Unwraps the inner handle.
    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: OpenRequest> OpenRequest for EnforcedOpen<H> {
    fn open(&mut self, method: &str, url: &str, args: &OpenArgs) -> Result<(), FetchError> {
        let enforced = self.policy.enforce(url);
        self.inner.open(method, &enforced, args)
    }

    fn send(&mut self, body: Option<&[u8]>) -> Result<FetchResponse, FetchError> {
        self.inner.send(body)
    }
}
