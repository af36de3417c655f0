use actix_web::{post, web, HttpResponse};
use log::debug;

use crate::models::{ApiResponse, MusicDifficultyStatus, RankSummary, ResultsRequest};
use crate::services::RankService;
use crate::utils::error::{AppError, AppResult};

/// 计算综合榜单、APPEND 榜单及总分
///
/// 无法计分的成绩（曲库中不存在、难度不存在）会被直接忽略。
#[utoipa::path(
    post,
    path = "/rank",
    tag = "Rank",
    request_body = ResultsRequest,
    responses(
        (status = 200, description = "成功计算榜单", body = ApiResponse<RankSummary>)
    )
)]
#[post("/rank")]
pub async fn get_rank(
    req: web::Json<ResultsRequest>,
    rank_service: web::Data<RankService>,
) -> AppResult<HttpResponse> {
    debug!("接收到榜单计算请求，成绩数: {}", req.results.len());

    let summary = rank_service.summary(&req.results).await;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(summary.as_ref().clone())))
}

/// 获取综合榜单中的前N项
#[utoipa::path(
    post,
    path = "/bn/{n}",
    tag = "Rank",
    params(
        ("n" = u32, Path, description = "要获取的最高成绩数量")
    ),
    request_body = ResultsRequest,
    responses(
        (status = 200, description = "成功获取B<n>成绩", body = ApiResponse<Vec<MusicDifficultyStatus>>),
        (status = 400, description = "无效的n值")
    )
)]
#[post("/bn/{n}")]
pub async fn get_bn(
    n: web::Path<u32>,
    req: web::Json<ResultsRequest>,
    rank_service: web::Data<RankService>,
) -> AppResult<HttpResponse> {
    let n = n.into_inner();
    debug!("接收到B{n}查询请求");

    if n == 0 {
        return Err(AppError::BadRequest("参数n必须大于0".to_string()));
    }

    let bn = rank_service.best_n(&req.results, n as usize).await;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(bn)))
}
