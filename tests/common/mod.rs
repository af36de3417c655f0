#![allow(dead_code)]

use std::sync::{Arc, Once};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use sekai_rank_backend::models::{Difficulty, PlayResult, ResultTier, Song};
use sekai_rank_backend::services::{RankService, SongService};

static INIT: Once = Once::new();

/// 测试日志只输出 warn 以上
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .is_test(true)
            .try_init();
    });
}

pub const CATALOG_JSON: &str = r#"[
    {"id": "1", "title": "Tell Your World", "title_en": "Tell Your World",
     "levels": {"easy": 5, "normal": 10, "hard": 16, "expert": 22, "master": 26, "append": null}},
    {"id": "2", "title": "ロキ", "title_en": "Roki",
     "levels": {"easy": 7, "normal": 12, "hard": 17, "expert": 24, "master": 30, "append": 31},
     "mas_fc": 30.3, "mas_ap": 30.6, "apd_ap": 31.4, "exp": 24.2},
    {"id": "3", "title": "テオ", "title_en": "Teo",
     "levels": {"easy": 6, "normal": 11, "hard": 17, "expert": 25, "master": 31, "append": 32},
     "mas_ap": 0, "apd_fc": -1}
]"#;

pub fn catalog() -> Vec<Song> {
    serde_json::from_str(CATALOG_JSON).expect("fixture catalog must parse")
}

pub fn services() -> (Arc<SongService>, RankService) {
    let songs = Arc::new(SongService::new(catalog()));
    let rank = RankService::new(songs.clone(), 100, Duration::from_secs(60));
    (songs, rank)
}

pub fn result(id: &str, difficulty: Difficulty, tier: ResultTier) -> PlayResult {
    PlayResult::new(id, difficulty, tier, Utc.timestamp_millis_opt(1_700_000_000_000).unwrap())
}
