//! HTTPS upgrade policy: the URL rewrite decision.
//!
//! Purely textual rule: a URL starting with the literal prefix `http://` is
//! upgraded to `https://` unless it contains a loopback token (`localhost`,
//! `127.0.0.1`). No URL parsing happens here, so the decision is total over
//! any string input, including empty and malformed ones.

use crate::config::HttpsupConfig;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// Tokens that always exempt a URL from upgrading, so local development
/// over plaintext keeps working.
const LOOPBACK_TOKENS: [&str; 2] = ["localhost", "127.0.0.1"];

/// URL upgrade policy.
///
/// `Default` gives the built-in rule (loopback exemption only). Extra exempt
/// tokens can be appended from config; the built-in tokens cannot be removed.
#[derive(Debug, Clone)]
pub struct UpgradePolicy {
    exempt_tokens: Vec<String>,
}

impl Default for UpgradePolicy {
    fn default() -> Self {
        Self {
            exempt_tokens: LOOPBACK_TOKENS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl UpgradePolicy {
    /// Builds the default policy with additional exempt tokens appended.
    pub fn with_extra_exemptions(extra: &[String]) -> Self {
        let mut policy = Self::default();
        policy
            .exempt_tokens
            .extend(extra.iter().map(|t| t.trim().to_string()).filter(|t| !t.is_empty()));
        policy
    }

    /// Builds the policy from loaded configuration.
    pub fn from_config(cfg: &HttpsupConfig) -> Self {
        Self::with_extra_exemptions(&cfg.extra_exempt_hosts)
    }

    /// Returns the HTTPS-safe form of `url`.
    ///
    /// Never fails: if the URL contains an exempt token, does not start with
    /// `http://`, or is empty, it comes back unchanged. Only the leading
    /// `http://` prefix is ever replaced; the remainder of the string is
    /// untouched byte-for-byte.
    pub fn enforce(&self, url: &str) -> String {
        if self.is_exempt(url) {
            return url.to_string();
        }
        match url.strip_prefix(HTTP_PREFIX) {
            Some(rest) => {
                let upgraded = format!("{}{}", HTTPS_PREFIX, rest);
                tracing::info!("upgrading plaintext URL: {} -> {}", url, upgraded);
                upgraded
            }
            None => url.to_string(),
        }
    }

    /// True if `url` contains any exempt token as a substring. Containment
    /// (not host parsing) is intentional: it matches the upgrade rule's own
    /// textual level and errs on the side of leaving URLs alone.
    fn is_exempt(&self, url: &str) -> bool {
        self.exempt_tokens.iter().any(|t| url.contains(t.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upgrades_plain_http() {
        let p = UpgradePolicy::default();
        assert_eq!(
            p.enforce("http://example.com/api"),
            "https://example.com/api"
        );
    }

    #[test]
    fn remainder_is_untouched() {
        let p = UpgradePolicy::default();
        let input = "http://example.com/a?b=http://nested.example.com";
        let out = p.enforce(input);
        assert_eq!(out, format!("https://{}", &input[7..]));
    }

    #[test]
    fn loopback_is_exempt() {
        let p = UpgradePolicy::default();
        assert_eq!(p.enforce("http://localhost:8080/x"), "http://localhost:8080/x");
        assert_eq!(p.enforce("http://127.0.0.1/health"), "http://127.0.0.1/health");
    }

    #[test]
    fn loopback_token_anywhere_exempts() {
        // Containment semantics: the token does not have to be the host.
        let p = UpgradePolicy::default();
        assert_eq!(
            p.enforce("http://example.com/proxy?to=localhost"),
            "http://example.com/proxy?to=localhost"
        );
    }

    #[test]
    fn https_and_other_schemes_unchanged() {
        let p = UpgradePolicy::default();
        assert_eq!(p.enforce("https://example.com"), "https://example.com");
        assert_eq!(p.enforce("ftp://example.com/f"), "ftp://example.com/f");
        assert_eq!(p.enforce("/relative/path"), "/relative/path");
        assert_eq!(p.enforce(""), "");
    }

    #[test]
    fn idempotent() {
        let p = UpgradePolicy::default();
        for u in [
            "http://example.com",
            "https://example.com",
            "http://localhost/x",
            "",
            "not a url",
        ] {
            let once = p.enforce(u);
            assert_eq!(p.enforce(&once), once);
        }
    }

    #[test]
    fn extra_exemptions_apply() {
        let p = UpgradePolicy::with_extra_exemptions(&["internal.corp".to_string()]);
        assert_eq!(
            p.enforce("http://internal.corp/dash"),
            "http://internal.corp/dash"
        );
        // Built-in tokens still present.
        assert_eq!(p.enforce("http://localhost/x"), "http://localhost/x");
        // Everything else still upgrades.
        assert_eq!(p.enforce("http://example.com"), "https://example.com");
    }

    #[test]
    fn blank_extra_exemptions_ignored() {
        let p = UpgradePolicy::with_extra_exemptions(&["  ".to_string(), String::new()]);
        assert_eq!(p.enforce("http://example.com"), "https://example.com");
    }
}
