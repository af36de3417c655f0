use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::play_result::PlayResult;
use crate::models::status::RankSummary;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub code: u32,
    pub status: String,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: 200,
            status: "OK".to_string(),
            message: None,
            data: Some(data),
        }
    }
}

/// 携带成绩集的请求体
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResultsRequest {
    #[serde(default)]
    pub results: Vec<PlayResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EncodeRequest {
    #[serde(default)]
    pub results: Vec<PlayResult>,
    /// 不传时使用曲库中最大的歌曲ID
    pub max_id: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EncodeResponse {
    pub data: String,
    pub max_id: u32,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DecodeQuery {
    /// 分享码
    pub data: String,
}

/// 解码结果与预览榜单
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DecodeResponse {
    pub results: Vec<PlayResult>,
    pub preview: RankSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MergeRequest {
    #[serde(default)]
    pub current: Vec<PlayResult>,
    #[serde(default)]
    pub incoming: Vec<PlayResult>,
}
