use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::services::{RankService, SongService};

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub songs: usize,
    pub cache_hits: u64,
    pub cache_misses: u64,
}

/// 健康检查端点
///
/// 曲库为空时依然返回 200，`songs` 字段可用于判断曲库是否加载成功。
#[utoipa::path(
    get,
    path = "/health",
    tag = "Status",
    responses(
        (status = 200, description = "服务健康", body = HealthResponse)
    )
)]
#[get("/health")]
pub async fn health_check(
    song_service: web::Data<SongService>,
    rank_service: web::Data<RankService>,
) -> impl Responder {
    let (cache_hits, cache_misses) = rank_service.cache_stats();
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        songs: song_service.len(),
        cache_hits,
        cache_misses,
    })
}
