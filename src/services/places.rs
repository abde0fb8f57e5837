//! 药店搜索服务
//!
//! 通过 Google Places 文本搜索查找附近药店。凭证缺失或外部调用失败
//! 都会降级为手动搜索指引，绝不向调用方抛错。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

use crate::config::config::PlacesConfig;
use crate::error::Result;
use crate::models::knowledge::COMMON_PHARMACY_CHAINS;

/// 单个药店条目
#[derive(Debug, Clone, Serialize)]
pub struct ChemistEntry {
    /// 名称
    pub name: String,
    /// 地址
    pub address: String,
    /// 评分
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// 当前是否营业
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
    /// Places 条目 ID
    pub place_id: String,
    /// 地图链接
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps_link: Option<String>,
}

/// 药店搜索成功结果
#[derive(Debug, Clone, Serialize)]
pub struct ChemistSearchResult {
    /// 搜索位置（回显输入）
    pub location: String,
    /// 搜索半径（公里）
    pub radius_km: f64,
    /// 找到的数量
    pub total_found: usize,
    /// 药店列表
    pub chemists: Vec<ChemistEntry>,
    /// 搜索时间
    pub search_timestamp: DateTime<Utc>,
    /// 备注
    pub note: &'static str,
}

/// 药店搜索降级结果
#[derive(Debug, Clone, Serialize)]
pub struct ChemistFallback {
    /// 失败原因
    pub error: String,
    /// 提示消息
    pub message: &'static str,
    /// 手动搜索指引
    pub manual_search: String,
    /// 常见连锁药店
    pub common_chains: Vec<&'static str>,
}

impl ChemistFallback {
    fn new(error: String, message: &'static str, location: &str) -> Self {
        Self {
            error,
            message,
            manual_search: format!("Search for 'pharmacy near {}' on Google Maps", location),
            common_chains: COMMON_PHARMACY_CHAINS.to_vec(),
        }
    }
}

/// find_chemists 的结果
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ChemistResult {
    /// 搜索成功
    Found(ChemistSearchResult),
    /// 降级为手动搜索
    Fallback(ChemistFallback),
}

/// 药店搜索 trait
#[async_trait]
pub trait ChemistFinder: Send + Sync {
    /// 在指定位置附近查找药店
    ///
    /// 任何失败都转为 [`ChemistResult::Fallback`]，不会返回错误。
    async fn find(&self, location: &str, radius_km: f64) -> ChemistResult;
}

/// Places 文本搜索响应
#[derive(Debug, Deserialize)]
struct PlacesResponse {
    #[serde(default)]
    results: Vec<PlaceItem>,
    #[serde(default)]
    status: String,
}

#[derive(Debug, Deserialize)]
struct PlaceItem {
    #[serde(default)]
    name: String,
    formatted_address: Option<String>,
    vicinity: Option<String>,
    rating: Option<f64>,
    opening_hours: Option<OpeningHours>,
    #[serde(default)]
    place_id: String,
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct OpeningHours {
    open_now: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: GeoPoint,
}

#[derive(Debug, Deserialize)]
struct GeoPoint {
    lat: f64,
    lng: f64,
}

/// 基于 Google Places 的药店搜索实现
pub struct GooglePlacesFinder {
    client: reqwest::Client,
    config: PlacesConfig,
}

impl GooglePlacesFinder {
    /// 创建新的搜索客户端
    pub fn new(config: PlacesConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self { client, config })
    }

    fn api_key_configured(&self) -> bool {
        !self.config.api_key.is_empty()
            && self.config.api_key != "your_google_places_api_key_here"
    }

    async fn search(&self, location: &str, radius_km: f64) -> Result<ChemistSearchResult> {
        let url = format!("{}/textsearch/json", self.config.base_url);
        let radius_m = (radius_km * 1000.0).round();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", format!("pharmacy near {}", location)),
                ("radius", radius_m.to_string()),
                ("type", "pharmacy".to_string()),
                ("key", self.config.api_key.clone()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: PlacesResponse = response.json().await?;
        if !body.status.is_empty() && body.status != "OK" && body.status != "ZERO_RESULTS" {
            return Err(crate::error::AppError::ExternalService(format!(
                "Places API status: {}",
                body.status
            )));
        }

        let chemists: Vec<ChemistEntry> = body
            .results
            .into_iter()
            .take(self.config.max_results)
            .map(|place| {
                let maps_link = place
                    .geometry
                    .as_ref()
                    .map(|g| format!("https://maps.google.com/?q={},{}", g.location.lat, g.location.lng));
                ChemistEntry {
                    name: place.name,
                    address: place
                        .formatted_address
                        .or(place.vicinity)
                        .unwrap_or_else(|| "Address not available".to_string()),
                    rating: place.rating,
                    open_now: place.opening_hours.and_then(|h| h.open_now),
                    place_id: place.place_id,
                    maps_link,
                }
            })
            .collect();

        Ok(ChemistSearchResult {
            location: location.to_string(),
            radius_km,
            total_found: chemists.len(),
            chemists,
            search_timestamp: Utc::now(),
            note: "Call ahead to confirm medicine availability",
        })
    }
}

#[async_trait]
impl ChemistFinder for GooglePlacesFinder {
    async fn find(&self, location: &str, radius_km: f64) -> ChemistResult {
        if !self.api_key_configured() {
            return ChemistResult::Fallback(ChemistFallback::new(
                "Google Places API key not configured".to_string(),
                "Please configure a Google Places API key",
                location,
            ));
        }

        match self.search(location, radius_km).await {
            Ok(result) => ChemistResult::Found(result),
            Err(e) => {
                warn!("Chemist search failed, falling back to manual guidance: {}", e);
                ChemistResult::Fallback(ChemistFallback::new(
                    format!("Failed to search chemists: {}", e),
                    "Try searching 'pharmacy near me' on Google Maps",
                    location,
                ))
            }
        }
    }
}

/// 创建药店搜索服务
pub fn create_chemist_finder(config: PlacesConfig) -> Result<Box<dyn ChemistFinder>> {
    Ok(Box::new(GooglePlacesFinder::new(config)?))
}
