// src/core/net.rs
//
// Page navigation. One `Source` per team selection; every fetch is one
// blocking GET with no retry.

use reqwest::blocking::Client;

use crate::config::ScrapeOptions;
use crate::error::{Error, Result};

/// Anything that can turn a page URL into its markup.
pub trait Source {
    fn fetch(&mut self, url: &str) -> Result<String>;
}

/// Live session against the remote site.
/// Opened per team selection; the client is released when it drops.
pub struct HttpSession {
    client: Client,
    fetches: usize,
}

impl HttpSession {
    pub fn open(opts: &ScrapeOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(opts.timeout())
            .user_agent(opts.user_agent.as_str())
            .build()
            .map_err(|e| Error::NavigationFailure {
                url: opts.base_url.clone(),
                reason: format!("could not open session: {e}"),
            })?;
        logd!("Session: Opened for {}", opts.base_url);
        Ok(Self { client, fetches: 0 })
    }
}

impl Source for HttpSession {
    fn fetch(&mut self, url: &str) -> Result<String> {
        self.fetches += 1;
        let fail = |reason: String| Error::NavigationFailure { url: s!(url), reason };

        let resp = self.client.get(url).send().map_err(|e| fail(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(fail(format!("HTTP {status}")));
        }
        let body = resp.text().map_err(|e| fail(e.to_string()))?;
        logd!("Session: GET {url} → {} bytes", body.len());
        Ok(body)
    }
}

impl Drop for HttpSession {
    fn drop(&mut self) {
        logd!("Session: Closed after {} fetch(es)", self.fetches);
    }
}
