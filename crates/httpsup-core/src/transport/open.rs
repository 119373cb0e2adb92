//! Legacy request handle over a curl `Easy`.

use curl::easy::Easy;

use crate::fetch::{FetchError, FetchResponse};
use crate::legacy::{OpenArgs, OpenRequest};

/// Two-phase request handle: `open` stakes method, URL, and credentials onto
/// the underlying curl handle; `send` performs the transfer.
///
/// The async flag of [`OpenArgs`] is accepted for signature fidelity; a curl
/// `Easy` handle always performs synchronously.
pub struct EasyOpen {
    easy: Easy,
    opened: bool,
}

impl EasyOpen {
    pub fn new() -> Self {
        Self {
            easy: Easy::new(),
            opened: false,
        }
    }
}

impl Default for EasyOpen {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenRequest for EasyOpen {
    fn open(&mut self, method: &str, url: &str, args: &OpenArgs) -> Result<(), FetchError> {
        self.easy.url(url)?;
        self.easy.follow_location(true)?;
        match method.to_ascii_uppercase().as_str() {
            "GET" => self.easy.get(true)?,
            "HEAD" => self.easy.nobody(true)?,
            "POST" => self.easy.post(true)?,
            other => self.easy.custom_request(other)?,
        }
        if let Some(user) = &args.username {
            self.easy.username(user)?;
        }
        if let Some(pass) = &args.password {
            self.easy.password(pass)?;
        }
        self.opened = true;
        Ok(())
    }

    fn send(&mut self, body: Option<&[u8]>) -> Result<FetchResponse, FetchError> {
        if !self.opened {
            return Err(FetchError::Upstream("send called before open".to_string()));
        }
        if let Some(body) = body {
            self.easy.post_fields_copy(body)?;
        }
        super::run_transfer(&mut self.easy)
    }
}
