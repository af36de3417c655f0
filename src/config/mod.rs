use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    /// 曲库目录
    pub data_path: String,
    pub catalog_file: String,
    /// 设置后从远程拉取曲库，忽略本地文件
    pub catalog_url: Option<String>,
    pub rank_cache_capacity: u64,
    pub rank_cache_ttl_secs: u64,
    /// 分享码编码时允许的最大歌曲ID
    pub max_share_id: u32,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_allowed_origins: vec!["*".to_string()],
            data_path: "data".to_string(),
            catalog_file: "songs.json".to_string(),
            catalog_url: None,
            rank_cache_capacity: 10_000,
            rank_cache_ttl_secs: 10 * 60,
            max_share_id: 100_000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let defaults = Self::default();
        Self {
            host: env_or("HOST", &defaults.host),
            port: env_parse("PORT", defaults.port),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.cors_allowed_origins),
            data_path: env_or("DATA_PATH", &defaults.data_path),
            catalog_file: env_or("CATALOG_FILE", &defaults.catalog_file),
            catalog_url: env::var("CATALOG_URL").ok().filter(|v| !v.trim().is_empty()),
            rank_cache_capacity: env_parse("RANK_CACHE_CAPACITY", defaults.rank_cache_capacity),
            rank_cache_ttl_secs: env_parse("RANK_CACHE_TTL_SECS", defaults.rank_cache_ttl_secs),
            max_share_id: env_parse("MAX_SHARE_ID", defaults.max_share_id),
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        PathBuf::from(&self.data_path).join(&self.catalog_file)
    }
}

lazy_static! {
    pub static ref CONFIG: Arc<AppConfig> = Arc::new(AppConfig::from_env());
}
