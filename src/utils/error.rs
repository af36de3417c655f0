use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("找不到歌曲: {0}")]
    SongNotFound(String),

    #[error("错误的请求: {0}")]
    BadRequest(String),

    #[error("曲库加载失败: {0}")]
    CatalogError(String),

    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP请求错误: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("Serde JSON错误: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl AppError {
    fn kind(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::SongNotFound(_) => (StatusCode::NOT_FOUND, "song_not_found"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::CatalogError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "catalog_error"),
            AppError::IoError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "io_error"),
            AppError::ReqwestError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "request_error"),
            AppError::SerdeJsonError(_) => (StatusCode::BAD_REQUEST, "serialization_error"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.kind().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_type) = self.kind();

        HttpResponse::build(status_code).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        })
    }
}
