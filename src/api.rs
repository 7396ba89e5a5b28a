//! HTTP boundary to the encounter data service.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    encounter::{EncounterRecord, EnemyStub, NgLevel, ProgressStats, RegionSummary},
    error::ApiError,
    navigation::{Request, Response},
};

pub const DEFAULT_API_URL: &str = "http://localhost:5001";

/// The logical operations the navigation core consumes.
#[async_trait]
pub trait DataService: Send + Sync {
    async fn search(&self, query: &str, ng: NgLevel) -> Result<Vec<EnemyStub>, ApiError>;

    /// An empty list means `region` is not a known region.
    async fn region_enemies(&self, region: &str, ng: NgLevel) -> Result<Vec<EnemyStub>, ApiError>;

    async fn region_average(&self, region: &str, ng: NgLevel) -> Result<RegionSummary, ApiError>;

    async fn encounter_detail(
        &self,
        name: &str,
        ng: NgLevel,
        location: Option<&str>,
    ) -> Result<EncounterRecord, ApiError>;

    async fn progress_stats(&self, ng: NgLevel) -> Result<ProgressStats, ApiError>;
}

/// Runs one navigation request against `service`.
pub async fn execute<S: DataService + ?Sized>(
    service: &S,
    request: &Request,
) -> Result<Response, ApiError> {
    match request {
        Request::Search { query, ng } => service.search(query, *ng).await.map(Response::Enemies),
        Request::RegionEnemies { region, ng, .. } => service
            .region_enemies(region, *ng)
            .await
            .map(Response::Enemies),
        Request::RegionAverage { region, ng } => service
            .region_average(region, *ng)
            .await
            .map(Response::Region),
        Request::EncounterDetail {
            name, ng, location, ..
        } => service
            .encounter_detail(name, *ng, location.as_deref())
            .await
            .map(Response::Encounter),
        Request::Progress { ng } => service.progress_stats(*ng).await.map(Response::Progress),
    }
}

#[derive(Deserialize)]
struct SearchPayload {
    #[serde(default)]
    results: Vec<EnemyStub>,
}

#[derive(Deserialize)]
struct RegionEnemiesPayload {
    #[serde(default)]
    enemies: Vec<EnemyStub>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub data_loaded: bool,
    #[serde(default)]
    pub ng_levels: Vec<String>,
    #[serde(default)]
    pub total_enemies: u64,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `<base>/<segments...>`, percent-encoding each segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json(self.endpoint(&["api", "health"])?, &[]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        log::debug!("GET {url} {query:?}");
        let response = self.client.get(url.clone()).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(url.path().to_string()));
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl DataService for ApiClient {
    async fn search(&self, query: &str, ng: NgLevel) -> Result<Vec<EnemyStub>, ApiError> {
        let url = self.endpoint(&["api", "search"])?;
        let payload: SearchPayload = self
            .get_json(url, &[("q", query), ("ng", ng.as_param())])
            .await?;
        Ok(payload.results)
    }

    async fn region_enemies(&self, region: &str, ng: NgLevel) -> Result<Vec<EnemyStub>, ApiError> {
        let url = self.endpoint(&["api", "region", region, "enemies"])?;
        let payload: RegionEnemiesPayload = self.get_json(url, &[("ng", ng.as_param())]).await?;
        Ok(payload.enemies)
    }

    async fn region_average(&self, region: &str, ng: NgLevel) -> Result<RegionSummary, ApiError> {
        let url = self.endpoint(&["api", "region", region])?;
        self.get_json(url, &[("ng", ng.as_param())]).await
    }

    async fn encounter_detail(
        &self,
        name: &str,
        ng: NgLevel,
        location: Option<&str>,
    ) -> Result<EncounterRecord, ApiError> {
        let url = self.endpoint(&["api", "enemy", name])?;
        let mut query = vec![("ng", ng.as_param())];
        if let Some(location) = location {
            query.push(("location", location));
        }
        self.get_json(url, &query).await
    }

    async fn progress_stats(&self, ng: NgLevel) -> Result<ProgressStats, ApiError> {
        let url = self.endpoint(&["api", "cache", "stats"])?;
        self.get_json(url, &[("ng", ng.as_param())]).await
    }
}
