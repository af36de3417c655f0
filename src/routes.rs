use actix_web::{get, web, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::controllers;

// OpenAPI 文档
#[get("/api-docs/openapi.json")]
async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .service(openapi_json)                // GET /api-docs/openapi.json
        // Status
        .service(controllers::health_check)   // GET /health
        // Songs
        .service(controllers::get_catalog)    // GET /songs
        .service(controllers::get_song)       // GET /songs/{id}
        // Rank
        .service(controllers::get_rank)       // POST /rank
        .service(controllers::get_bn)         // POST /bn/{n}
        // Share link
        .service(controllers::encode_share)   // POST /share/encode
        .service(controllers::decode_share)   // GET /share/decode
        // Result set
        .service(controllers::merge_results); // POST /results/merge
}

#[derive(OpenApi)]
#[openapi(
    paths(
        controllers::health::health_check,
        controllers::song::get_catalog,
        controllers::song::get_song,
        controllers::rank::get_rank,
        controllers::rank::get_bn,
        controllers::share::encode_share,
        controllers::share::decode_share,
        controllers::results::merge_results,
    ),
    tags(
        (name = "Status", description = "服务状态"),
        (name = "Song", description = "曲库查询"),
        (name = "Rank", description = "榜单与总分"),
        (name = "Share", description = "分享码"),
        (name = "Results", description = "成绩集合并"),
    )
)]
pub struct ApiDoc;
