use actix_web::{post, web, HttpResponse};

use crate::models::{ApiResponse, MergeRequest, PlayResult};
use crate::services::result_set;
use crate::utils::error::AppResult;

/// 把解码得到的成绩合并进现有成绩集
///
/// 只做计算，保存合并结果由调用方负责。
#[utoipa::path(
    post,
    path = "/results/merge",
    tag = "Results",
    request_body = MergeRequest,
    responses(
        (status = 200, description = "合并后的成绩集", body = ApiResponse<Vec<PlayResult>>)
    )
)]
#[post("/results/merge")]
pub async fn merge_results(req: web::Json<MergeRequest>) -> AppResult<HttpResponse> {
    let MergeRequest { current, incoming } = req.into_inner();
    let merged = result_set::merge_results(current, incoming);
    Ok(HttpResponse::Ok().json(ApiResponse::ok(merged)))
}
