use actix_web::{get, post, web, HttpResponse};

use crate::config::AppConfig;
use crate::models::{ApiResponse, DecodeQuery, DecodeResponse, EncodeRequest, EncodeResponse};
use crate::services::{RankService, SongService};
use crate::utils::error::{AppError, AppResult};
use crate::utils::result_codec;

/// 生成分享码
///
/// `maxId` 缺省时使用曲库中最大的歌曲ID，超出范围的成绩不会被编码。
#[utoipa::path(
    post,
    path = "/share/encode",
    tag = "Share",
    request_body = EncodeRequest,
    responses(
        (status = 200, description = "分享码", body = ApiResponse<EncodeResponse>),
        (status = 400, description = "maxId 超出允许范围")
    )
)]
#[post("/share/encode")]
pub async fn encode_share(
    req: web::Json<EncodeRequest>,
    song_service: web::Data<SongService>,
    config: web::Data<AppConfig>,
) -> AppResult<HttpResponse> {
    let max_id = req.max_id.unwrap_or_else(|| song_service.max_id());
    if max_id > config.max_share_id {
        return Err(AppError::BadRequest(format!(
            "maxId 不能超过 {}",
            config.max_share_id
        )));
    }

    let data = result_codec::encode(&req.results, max_id);
    log::info!("生成分享码: {} 条成绩, maxId = {max_id}", req.results.len());

    Ok(HttpResponse::Ok().json(ApiResponse::ok(EncodeResponse { data, max_id })))
}

/// 解析分享码并返回预览榜单
///
/// 查询串中的 `+` 可能已被还原为空格，这里会先换回 `+` 再解码。
#[utoipa::path(
    get,
    path = "/share/decode",
    tag = "Share",
    params(DecodeQuery),
    responses(
        (status = 200, description = "解码结果与预览", body = ApiResponse<DecodeResponse>)
    )
)]
#[get("/share/decode")]
pub async fn decode_share(
    query: web::Query<DecodeQuery>,
    rank_service: web::Data<RankService>,
) -> AppResult<HttpResponse> {
    let payload = query.data.replace(' ', "+");
    let payload = payload.trim();
    let results = result_codec::decode(payload);
    let preview = rank_service.summary(&results).await.as_ref().clone();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(DecodeResponse { results, preview })))
}
