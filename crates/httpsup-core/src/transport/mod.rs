//! Concrete transports the enforcement decorators wrap.
//!
//! Sync curl `Easy` handles, driven from async code via `spawn_blocking`.
//! No retry or backoff lives here; failure recovery belongs to callers.

mod fetch;
mod open;

pub use fetch::CurlFetch;
pub use open::EasyOpen;

use std::collections::HashMap;

use crate::fetch::{FetchError, FetchResponse};

/// Performs a prepared transfer on `easy`, collecting status, headers, and
/// body.
pub(crate) fn run_transfer(easy: &mut curl::easy::Easy) -> Result<FetchResponse, FetchError> {
    let mut header_lines: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = std::str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    Ok(FetchResponse {
        status,
        headers: parse_header_lines(&header_lines),
        body,
    })
}

/// Parses collected header lines into a name -> value map. Names are
/// lowercased; across redirect hops the last occurrence wins.
pub(crate) fn parse_header_lines(lines: &[String]) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
        }
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_header_lines_lowercases_names() {
        let lines = [
            "HTTP/1.1 200 OK".to_string(),
            "Content-Type: text/plain".to_string(),
            "X-Custom: a".to_string(),
        ];
        let headers = parse_header_lines(&lines);
        assert_eq!(headers.get("content-type").unwrap(), "text/plain");
        assert_eq!(headers.get("x-custom").unwrap(), "a");
        // The status line has no colon and is skipped.
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn parse_header_lines_last_occurrence_wins() {
        let lines = [
            "Location: /first".to_string(),
            "Location: /second".to_string(),
        ];
        let headers = parse_header_lines(&lines);
        assert_eq!(headers.get("location").unwrap(), "/second");
    }

    #[test]
    fn parse_header_lines_skips_blank_lines() {
        let lines = ["".to_string(), "A: 1".to_string()];
        assert_eq!(parse_header_lines(&lines).len(), 1);
    }
}
