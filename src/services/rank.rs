use moka::future::Cache;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::Duration;

use crate::models::{Difficulty, MusicDifficultyStatus, PlayResult, RankSummary, ResultTier};
use crate::services::song::SongService;
use crate::utils::rank_utils;

/// 缓存键：按输入顺序排列的 (ID, 难度, 档位)
pub type ResultsKey = Arc<[(String, Difficulty, ResultTier)]>;

// 榜单服务：在曲库之上计算榜单，并按成绩集缓存结果
pub struct RankService {
    songs: Arc<SongService>,
    summary_cache: Cache<ResultsKey, Arc<RankSummary>>,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
}

impl RankService {
    pub fn new(songs: Arc<SongService>, capacity: u64, ttl: Duration) -> Self {
        Self {
            songs,
            summary_cache: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
            cache_hits: AtomicU64::new(0),
            cache_misses: AtomicU64::new(0),
        }
    }

    /// 缓存键。曲库在服务生命周期内不变，只有 ID、难度、档位及其顺序影响结果。
    pub fn results_key(results: &[PlayResult]) -> ResultsKey {
        results
            .iter()
            .map(|r| (r.music_id.clone(), r.music_difficulty, r.play_result))
            .collect()
    }

    pub async fn summary(&self, results: &[PlayResult]) -> Arc<RankSummary> {
        let key = Self::results_key(results);

        if let Some(cached) = self.summary_cache.get(&key).await {
            self.cache_hits.fetch_add(1, AtomicOrdering::Relaxed);
            log::debug!("[榜单缓存] 命中: {} 条成绩", key.len());
            return cached;
        }

        self.summary_cache
            .get_with(key, async {
                self.cache_misses.fetch_add(1, AtomicOrdering::Relaxed);
                Arc::new(rank_utils::summarize(|id| self.songs.get(id), results))
            })
            .await
    }

    /// 综合榜单前 n 条
    pub async fn best_n(&self, results: &[PlayResult], n: usize) -> Vec<MusicDifficultyStatus> {
        self.summary(results).await.best.iter().take(n).cloned().collect()
    }

    /// (命中次数, 未命中次数)
    pub fn cache_stats(&self) -> (u64, u64) {
        (
            self.cache_hits.load(AtomicOrdering::Relaxed),
            self.cache_misses.load(AtomicOrdering::Relaxed),
        )
    }
}
