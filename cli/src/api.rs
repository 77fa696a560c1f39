use crate::schema::{ErrorBody, SystemParameters, TagList};
use anyhow::{Result, anyhow};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

pub struct FolioAPI {
    domain: String,
    client: Client,
}

impl FolioAPI {
    pub fn new(config: &crate::config::Config) -> Self {
        Self {
            domain: config.current_domain(),
            client: Client::new(),
        }
    }

    pub fn client(&self) -> Client {
        self.client.clone()
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub async fn get_system_parameters(&self) -> Result<SystemParameters> {
        let resp = self
            .client
            .get(format!("{}/api/system-parameters", self.domain))
            .send()
            .await?;

        parse(resp).await
    }

    pub async fn get_tags(&self) -> Result<TagList> {
        let resp = self
            .client
            .get(format!("{}/api/tags", self.domain))
            .send()
            .await?;

        parse(resp).await
    }
}

/// Decodes a success body, or turns the server's `{ "error": ... }` body
/// into an error.
async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json().await?);
    }

    match resp.json::<ErrorBody>().await {
        Ok(body) => Err(anyhow!("{} ({})", body.error, status)),
        Err(_) => Err(anyhow!("request failed with status {}", status)),
    }
}
