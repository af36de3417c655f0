use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use std::sync::Arc;
use std::time::Duration;

use sekai_rank_backend::config::CONFIG;
use sekai_rank_backend::routes;
use sekai_rank_backend::services::{RankService, SongService};
use sekai_rank_backend::utils::data_loader;

fn build_cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if origins.iter().any(|o| o == "*") {
        cors.allow_any_origin()
    } else {
        origins.iter().fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 加载.env文件
    dotenv().ok();

    // 初始化日志
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = CONFIG.clone();

    // --- 曲库加载 ---
    let songs = data_loader::load_catalog(&config).await;
    let song_service = Arc::new(SongService::new(songs));
    if song_service.is_empty() {
        log::warn!("曲库为空，所有成绩都将被视为无法计分");
    }
    log::info!("曲库就绪: {} 首歌曲，最大ID {}", song_service.len(), song_service.max_id());

    let rank_service = web::Data::new(RankService::new(
        song_service.clone(),
        config.rank_cache_capacity,
        Duration::from_secs(config.rank_cache_ttl_secs),
    ));
    let song_service = web::Data::from(song_service);
    let app_config = web::Data::new(config.as_ref().clone());

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let origins = config.cors_allowed_origins.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(song_service.clone())
            .app_data(rank_service.clone())
            .app_data(app_config.clone())
            .wrap(middleware::Logger::default())
            .wrap(build_cors(&origins))
            .configure(routes::configure)
    })
    .bind((config.host.clone(), config.port))?
    .run()
    .await
}
