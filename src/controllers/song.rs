use actix_web::{get, web, HttpResponse};

use crate::models::{ApiResponse, CatalogSummary, Song};
use crate::services::SongService;
use crate::utils::error::AppResult;

/// 曲库概要
#[utoipa::path(
    get,
    path = "/songs",
    tag = "Song",
    responses(
        (status = 200, description = "曲库歌曲数量与最大ID", body = ApiResponse<CatalogSummary>)
    )
)]
#[get("/songs")]
pub async fn get_catalog(song_service: web::Data<SongService>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok(song_service.summary())))
}

/// 按ID查询歌曲
#[utoipa::path(
    get,
    path = "/songs/{id}",
    tag = "Song",
    params(
        ("id" = String, Path, description = "歌曲ID")
    ),
    responses(
        (status = 200, description = "歌曲信息", body = ApiResponse<Song>),
        (status = 404, description = "找不到歌曲")
    )
)]
#[get("/songs/{id}")]
pub async fn get_song(
    id: web::Path<String>,
    song_service: web::Data<SongService>,
) -> AppResult<HttpResponse> {
    let song = song_service.get_song(&id)?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(song)))
}
