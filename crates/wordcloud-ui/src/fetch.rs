//! CSV retrieval over HTTP

use gloo_net::http::Request;
use wordcloud_core::{Error, ResourceSource, Result};

/// Fetches resources relative to the page with `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSource;

impl ResourceSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<String> {
        let response = Request::get(path)
            .send()
            .await
            .map_err(|e| Error::resource_unavailable(path, e.to_string()))?;

        if !response.ok() {
            return Err(Error::resource_unavailable(
                path,
                format!("HTTP {} {}", response.status(), response.status_text()),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| Error::resource_unavailable(path, e.to_string()))
    }
}
