use reqwest::Client;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::config::AppConfig;
use crate::models::Song;
use crate::utils::error::{AppError, AppResult};

// 从本地 JSON 文件加载曲库
pub fn load_songs_from_file(path: &Path) -> AppResult<Vec<Song>> {
    log::debug!("正在加载曲库，路径: {}", path.display());
    let content = fs::read_to_string(path)?;
    let songs: Vec<Song> = serde_json::from_str(&content)?;
    log::debug!("曲库加载完成，共 {} 首", songs.len());
    Ok(songs)
}

// 从远程地址拉取曲库
pub async fn fetch_songs(url: &str) -> AppResult<Vec<Song>> {
    log::debug!("正在拉取远程曲库: {url}");
    let client = Client::builder()
        .connect_timeout(Duration::from_secs(3))
        .timeout(Duration::from_secs(15))
        .build()
        .unwrap_or_else(|e| {
            log::warn!("构建 HTTP 客户端失败，回退默认设置: {e}");
            Client::new()
        });

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(AppError::CatalogError(format!(
            "远程曲库返回状态码 {}",
            response.status()
        )));
    }
    let songs: Vec<Song> = response.json().await?;
    log::debug!("远程曲库拉取完成，共 {} 首", songs.len());
    Ok(songs)
}

/// 按配置加载曲库。失败时记录错误并返回空曲库，服务照常启动。
pub async fn load_catalog(config: &AppConfig) -> Vec<Song> {
    let loaded = match &config.catalog_url {
        Some(url) => fetch_songs(url).await,
        None => load_songs_from_file(&config.catalog_path()),
    };

    match loaded {
        Ok(songs) => {
            log::info!("已加载 {} 首歌曲", songs.len());
            songs
        }
        Err(e) => {
            log::error!("加载曲库失败: {e}");
            Vec::new()
        }
    }
}
