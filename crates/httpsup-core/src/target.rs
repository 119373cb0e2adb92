//! Request target model.
//!
//! Callers hand a fetch entry point one of three shapes: a plain URL string,
//! a parsed URL value, or a composite request carrying its own URL. Whichever
//! shape enters the enforcement layer must leave it, with only the URL field
//! possibly changed, so the wrapped entry point receives a value it still
//! recognizes.

use std::collections::HashMap;
use std::time::Duration;

use url::Url;

/// Composite request value: a URL bundled with everything else a call site
/// configured for the request.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub url: String,
    pub method: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
    /// Credentials mode carried opaquely (e.g. "include", "omit").
    pub credentials: Option<String>,
}

impl FetchRequest {
    /// A request with the given method and URL and nothing else configured.
    pub fn new(method: &str, url: &str) -> Self {
        Self {
            url: url.to_string(),
            method: method.to_string(),
            headers: HashMap::new(),
            body: None,
            credentials: None,
        }
    }
}

/// Options bundle forwarded verbatim to the underlying entry point.
///
/// The enforcement layer never inspects this; any timeout or cancellation
/// semantics it carries belong to the transport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOptions {
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

/// A request target in whichever shape the caller built it.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchTarget {
    /// Plain URL string.
    Str(String),
    /// Parsed URL value; its URL is the serialized absolute form.
    Parsed(Url),
    /// Composite request carrying its own URL.
    Request(FetchRequest),
}

impl FetchTarget {
    /// The plain string URL of this target, whichever shape it is.
    pub fn url_str(&self) -> &str {
        match self {
            FetchTarget::Str(s) => s,
            FetchTarget::Parsed(u) => u.as_str(),
            FetchTarget::Request(r) => &r.url,
        }
    }

    /// Rebuilds the same shape carrying `new_url`; every non-URL field is
    /// preserved.
    ///
    /// If `new_url` does not re-parse for the `Parsed` shape, the original
    /// target is returned unchanged: rewriting is best-effort and must never
    /// fail the underlying call.
    pub fn with_url(self, new_url: &str) -> FetchTarget {
        match self {
            FetchTarget::Str(_) => FetchTarget::Str(new_url.to_string()),
            FetchTarget::Parsed(original) => match Url::parse(new_url) {
                Ok(u) => FetchTarget::Parsed(u),
                Err(_) => FetchTarget::Parsed(original),
            },
            FetchTarget::Request(mut r) => {
                r.url = new_url.to_string();
                FetchTarget::Request(r)
            }
        }
    }
}

impl From<&str> for FetchTarget {
    fn from(s: &str) -> Self {
        FetchTarget::Str(s.to_string())
    }
}

impl From<String> for FetchTarget {
    fn from(s: String) -> Self {
        FetchTarget::Str(s)
    }
}

impl From<Url> for FetchTarget {
    fn from(u: Url) -> Self {
        FetchTarget::Parsed(u)
    }
}

impl From<FetchRequest> for FetchTarget {
    fn from(r: FetchRequest) -> Self {
        FetchTarget::Request(r)
    }
}
