use crate::error::{RefscopeError, Result};
use crate::resource::{Resource, ResourceLink, ResourceSource};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

/// Fetches resource documents over HTTP.
///
/// Resources live at `{base}/{kind}/{uuid}` and come back as JSON documents
/// carrying `uuid`, `fq_name` and the three relation lists. Anything beyond
/// that shape belongs to the remote service, not to this client.
pub struct HttpSource {
    http: reqwest::Client,
    base: Url,
}

impl HttpSource {
    pub fn new(mut base: Url) -> Self {
        // Url::join replaces the last path segment unless the base ends in a
        // slash.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    fn resource_url(&self, link: &ResourceLink) -> Result<Url> {
        Ok(self.base.join(&format!("{}/{}", link.kind, link.uuid))?)
    }
}

#[async_trait]
impl ResourceSource for HttpSource {
    async fn fetch(&self, link: &ResourceLink) -> Result<Resource> {
        let url = self.resource_url(link)?;
        debug!(%url, "fetching resource");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| RefscopeError::Fetch {
                link: link.clone(),
                source,
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(RefscopeError::NotFound(link.clone()));
        }
        let response = response
            .error_for_status()
            .map_err(|source| RefscopeError::Fetch {
                link: link.clone(),
                source,
            })?;

        response
            .json::<Resource>()
            .await
            .map_err(|source| RefscopeError::Fetch {
                link: link.clone(),
                source,
            })
    }
}
