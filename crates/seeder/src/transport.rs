use crate::error::SeedError;
use async_trait::async_trait;
use models::{
    collection::Collection,
    record::{Listed, RecordId},
};
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

/// The three operations each MockAPI collection supports
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches every record currently stored in `collection`
    async fn list(&self, collection: Collection) -> Result<Vec<Listed>, SeedError>;

    /// Creates a record and returns the service's representation of it.
    ///
    /// Only a `201 Created` answer counts as success.
    async fn create(&self, collection: Collection, body: Value) -> Result<Value, SeedError>;

    /// Deletes one record by id. The answer's status is not inspected, so
    /// only transport failures surface as errors.
    async fn delete(&self, collection: Collection, id: &RecordId) -> Result<(), SeedError>;
}

/// Checks that a creation request was answered with `201 Created`
pub fn expect_created(collection: Collection, status: StatusCode) -> Result<(), SeedError> {
    if status == StatusCode::CREATED {
        Ok(())
    } else {
        Err(SeedError::UnexpectedStatus { collection, status })
    }
}

/// [`Transport`] backed by a MockAPI project over HTTPS
pub struct MockApiClient {
    client: Client,
    base_url: Url,
}

impl MockApiClient {
    /// Creates a client rooted at `base_url`, with or without a trailing slash
    ///
    /// # Arguments
    /// * `base_url` - The project URL, e.g. `https://<project>.mockapi.io/`
    ///
    /// # Returns
    /// The client, or [`SeedError::InvalidUrl`] if the URL cannot hold collection paths
    pub fn new(base_url: &str) -> Result<Self, SeedError> {
        Self::with_client(base_url, Client::new())
    }

    /// Like [`MockApiClient::new`], sending requests through `client`
    pub fn with_client(base_url: &str, client: Client) -> Result<Self, SeedError> {
        let url = Url::parse(base_url)
            .map_err(|e| SeedError::InvalidUrl(format!("{base_url}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(SeedError::InvalidUrl(base_url.to_owned()));
        }

        Ok(Self {
            client,
            base_url: url,
        })
    }

    /// Builds `<base>/<collection>` or `<base>/<collection>/<id>`
    fn endpoint(&self, collection: Collection, id: Option<&RecordId>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(collection.as_str());
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }

        url
    }
}

#[async_trait]
impl Transport for MockApiClient {
    async fn list(&self, collection: Collection) -> Result<Vec<Listed>, SeedError> {
        let response = self.client.get(self.endpoint(collection, None)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SeedError::UnexpectedStatus { collection, status });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn create(&self, collection: Collection, body: Value) -> Result<Value, SeedError> {
        let response = self
            .client
            .post(self.endpoint(collection, None))
            .json(&body)
            .send()
            .await?;

        expect_created(collection, response.status())?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn delete(&self, collection: Collection, id: &RecordId) -> Result<(), SeedError> {
        self.client
            .delete(self.endpoint(collection, Some(id)))
            .send()
            .await?;

        Ok(())
    }
}
