//! Notion API client for page creation

use crate::config::{Credentials, NotionConfig};
use crate::mapping::PageRequest;
use crate::PublishError;
use reqwest::Client;
use serde::Deserialize;

/// The part of a created page the pipeline reports on
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPage {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Error body returned by the Notion API on non-2xx responses
#[derive(Debug, Default, Deserialize)]
struct NotionErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Authenticated client for `POST /pages`
#[derive(Clone)]
pub struct NotionClient {
    client: Client,
    api_base: String,
    api_version: String,
    token: String,
}

impl NotionClient {
    pub fn new(
        client: Client,
        api_base: impl Into<String>,
        api_version: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_version: api_version.into(),
            token: token.into(),
        }
    }

    /// Builds a client from the Notion config section and resolved credentials
    pub fn from_config(client: Client, config: &NotionConfig, credentials: &Credentials) -> Self {
        Self::new(
            client,
            config.api_base.as_str(),
            config.api_version.as_str(),
            credentials.token.as_str(),
        )
    }

    pub fn pages_url(&self) -> String {
        format!("{}/pages", self.api_base)
    }

    /// Creates one page
    ///
    /// `name` only labels errors; the page content comes entirely from `page`.
    ///
    /// # Returns
    ///
    /// * `Ok(CreatedPage)` - Notion accepted the page
    /// * `Err(PublishError::Api)` - Notion answered with a non-2xx status
    /// * `Err(PublishError::Http)` - The request could not be completed
    pub async fn create_page(
        &self,
        name: &str,
        page: &PageRequest,
    ) -> Result<CreatedPage, PublishError> {
        let http_error = |source| PublishError::Http {
            name: name.to_string(),
            source,
        };

        let response = self
            .client
            .post(self.pages_url())
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.api_version)
            .json(page)
            .send()
            .await
            .map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            // The body is informative only; an unreadable one still reports the status
            let body = response
                .json::<NotionErrorBody>()
                .await
                .unwrap_or_default();
            return Err(PublishError::Api {
                name: name.to_string(),
                status: status.as_u16(),
                code: body.code,
                message: body.message,
            });
        }

        response.json::<CreatedPage>().await.map_err(http_error)
    }
}

impl std::fmt::Debug for NotionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionClient")
            .field("api_base", &self.api_base)
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}
