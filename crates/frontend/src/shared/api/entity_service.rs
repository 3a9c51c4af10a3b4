//! The uniform REST repository every entity screen talks through.

use std::marker::PhantomData;

use contracts::domain::common::{EntityRecord, PageQuery};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{api_url, ApiError};

/// One page of a collection response. The total size travels in the
/// `x-total-count` header and is kept as the raw header string; callers
/// convert it when they need a number.
#[derive(Debug, Clone)]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub total_count: Option<String>,
}

impl<T> PageResponse<T> {
    /// Header value converted to an integer; 0 when absent or malformed.
    pub fn total(&self) -> u32 {
        self.total_count
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0)
    }
}

/// Backend repository contract for one entity type. Implemented for
/// production by [`RestEntityService`] and by in-memory fakes in tests.
#[allow(async_fn_in_trait)]
pub trait EntityService<T> {
    async fn find(&self, id: i64) -> Result<T, ApiError>;
    async fn retrieve(&self, query: Option<&PageQuery>) -> Result<PageResponse<T>, ApiError>;
    async fn search(
        &self,
        term: &str,
        query: Option<&PageQuery>,
    ) -> Result<PageResponse<T>, ApiError>;
    async fn create(&self, entity: &T) -> Result<T, ApiError>;
    async fn update(&self, entity: &T) -> Result<T, ApiError>;
    async fn partial_update(&self, entity: &T) -> Result<T, ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

/// HTTP implementation of [`EntityService`] over the generated REST API:
/// collection at `/api/<resource>`, search at `/api/<resource>/_search`.
pub struct RestEntityService<T> {
    resource_url: String,
    search_url: String,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for RestEntityService<T> {
    fn clone(&self) -> Self {
        Self {
            resource_url: self.resource_url.clone(),
            search_url: self.search_url.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: EntityRecord> RestEntityService<T> {
    pub fn new() -> Self {
        Self {
            resource_url: api_url(&format!("/api/{}", T::api_resource())),
            search_url: api_url(&format!("/api/{}/_search", T::api_resource())),
            _entity: PhantomData,
        }
    }
}

impl<T: EntityRecord> Default for RestEntityService<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::error!("backend call failed: HTTP {} {}", status, body);
    Err(ApiError::Status { status, body })
}

async fn read_entity<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

async fn read_page<T: DeserializeOwned>(response: Response) -> Result<PageResponse<T>, ApiError> {
    let response = check_status(response).await?;
    let total_count = response.headers().get("x-total-count");
    let data = response
        .json::<Vec<T>>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    Ok(PageResponse { data, total_count })
}

impl<T> EntityService<T> for RestEntityService<T>
where
    T: EntityRecord + Serialize + DeserializeOwned,
{
    async fn find(&self, id: i64) -> Result<T, ApiError> {
        let response = Request::get(&format!("{}/{}", self.resource_url, id))
            .send()
            .await
            .map_err(network)?;
        read_entity(response).await
    }

    async fn retrieve(&self, query: Option<&PageQuery>) -> Result<PageResponse<T>, ApiError> {
        let mut request = Request::get(&self.resource_url);
        if let Some(query) = query {
            request = request.query(query.query_pairs());
        }
        let response = request.send().await.map_err(network)?;
        read_page(response).await
    }

    async fn search(
        &self,
        term: &str,
        query: Option<&PageQuery>,
    ) -> Result<PageResponse<T>, ApiError> {
        let mut pairs = vec![("query", term.to_string())];
        if let Some(query) = query {
            pairs.extend(query.query_pairs());
        }
        let response = Request::get(&self.search_url)
            .query(pairs)
            .send()
            .await
            .map_err(network)?;
        read_page(response).await
    }

    async fn create(&self, entity: &T) -> Result<T, ApiError> {
        let response = Request::post(&self.resource_url)
            .json(entity)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_entity(response).await
    }

    async fn update(&self, entity: &T) -> Result<T, ApiError> {
        let id = entity.id().unwrap_or_default();
        let response = Request::put(&format!("{}/{}", self.resource_url, id))
            .json(entity)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_entity(response).await
    }

    async fn partial_update(&self, entity: &T) -> Result<T, ApiError> {
        let id = entity.id().unwrap_or_default();
        let body = serde_json::to_string(entity).map_err(|err| ApiError::Decode(err.to_string()))?;
        let response = Request::patch(&format!("{}/{}", self.resource_url, id))
            .header("Content-Type", "application/merge-patch+json")
            .body(body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_entity(response).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let response = Request::delete(&format!("{}/{}", self.resource_url, id))
            .send()
            .await
            .map_err(network)?;
        check_status(response).await?;
        Ok(())
    }
}
