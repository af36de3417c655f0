use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{Difficulty, MusicDifficultyStatus, PlayResult, Rank, RankSummary, Song};

/// 榜单容量
pub const BEST_LIST_SIZE: usize = 39;

// --- 单谱面计算 ---

/// 计算单个谱面的分数 R。没有评级时为 0。
pub fn chart_score(rank: Option<Rank>, level: f64) -> f64 {
    rank.map_or(0.0, |r| r.multiplier() * level)
}

fn positive(constant: Option<f64>) -> Option<f64> {
    constant.filter(|c| *c > 0.0)
}

/// 确定参与计算的等级，返回 (等级, 是否精确)。
///
/// 只有 EXPERT/MASTER/APPEND 会查精确定数：AP 查 AP 定数，FC 查 FC 定数，
/// 两者都不适用时 EXPERT 还会退回到通用的 `exp` 定数（任何评级都适用）。
/// 定数必须严格大于 0 才算数。
pub fn effective_level(song: &Song, difficulty: Difficulty, rank: Rank, nominal: f64) -> (f64, bool) {
    if !difficulty.has_rank_constants() {
        return (nominal, false);
    }

    let precise = if rank == Rank::P {
        positive(song.rank_constant(difficulty, Rank::P))
    } else if rank == Rank::F {
        positive(song.rank_constant(difficulty, Rank::F))
    } else {
        None
    };

    let precise = precise.or_else(|| {
        if difficulty == Difficulty::Expert {
            positive(song.exp)
        } else {
            None
        }
    });

    match precise {
        Some(level) => (level, true),
        None => (nominal, false),
    }
}

/// 展示用的名义等级。缺少名义等级时由实际等级反推。
pub fn base_level(nominal: Option<f64>, effective: f64, exact: bool) -> f64 {
    match nominal {
        Some(level) => level,
        None if exact => (effective - 0.4).floor(),
        None => effective.floor(),
    }
}

/// 计算一条成绩对应的谱面状态；无法计分时返回 None
pub fn compute_status(song: &Song, result: &PlayResult) -> Option<MusicDifficultyStatus> {
    let difficulty = result.music_difficulty;
    let rank = result.play_result.rank();

    let Some(nominal) = song.levels.get(difficulty) else {
        log::trace!("歌曲 {} 没有 {difficulty} 难度，跳过", song.id);
        return None;
    };

    let (level, exact) = effective_level(song, difficulty, rank, nominal);
    if !level.is_finite() {
        log::trace!("歌曲 {} 难度 {difficulty} 的等级无效，跳过", song.id);
        return None;
    }

    Some(MusicDifficultyStatus {
        music_id: song.id.clone(),
        difficulty,
        level,
        base_level: base_level(Some(nominal), level, exact),
        rank,
        r: chart_score(Some(rank), level),
        title: song.title.clone(),
        title_en: song.title_en.clone(),
        exact,
    })
}

// --- 榜单 ---

/// 去掉 R <= 0 的条目，按 R 降序稳定排序并截取前 39 条
pub fn select_best(mut statuses: Vec<MusicDifficultyStatus>) -> Vec<MusicDifficultyStatus> {
    statuses.retain(|s| s.r > 0.0);
    // sort_by 是稳定排序，R 相同的条目保持输入顺序
    statuses.sort_by(|a, b| b.r.partial_cmp(&a.r).unwrap_or(Ordering::Equal));
    statuses.truncate(BEST_LIST_SIZE);
    statuses
}

/// 用任意的歌曲查找方式计算榜单，`include` 决定哪些成绩参与计算
pub fn compute_best_results_by<'a, F, P>(
    find_song: F,
    results: &[PlayResult],
    include: P,
) -> Vec<MusicDifficultyStatus>
where
    F: Fn(&str) -> Option<&'a Song>,
    P: Fn(&PlayResult) -> bool,
{
    let mut skipped = 0usize;
    let statuses: Vec<MusicDifficultyStatus> = results
        .iter()
        .filter(|r| include(*r))
        .filter_map(|r| {
            let status = find_song(&r.music_id).and_then(|song| compute_status(song, r));
            if status.is_none() {
                skipped += 1;
            }
            status
        })
        .collect();

    log::debug!(
        "[Best39] 共 {} 条成绩，可计分 {} 条，跳过 {skipped} 条",
        results.len(),
        statuses.len()
    );

    select_best(statuses)
}

fn index_songs(songs: &[Song]) -> HashMap<&str, &Song> {
    songs.iter().map(|s| (s.id.as_str(), s)).collect()
}

/// 综合榜单：所有难度中 R 最高的 39 个谱面
pub fn compute_best_results(songs: &[Song], results: &[PlayResult]) -> Vec<MusicDifficultyStatus> {
    let index = index_songs(songs);
    compute_best_results_by(|id| index.get(id).copied(), results, |_| true)
}

/// APPEND 榜单：只统计 APPEND 难度
pub fn compute_best_append_results(songs: &[Song], results: &[PlayResult]) -> Vec<MusicDifficultyStatus> {
    let index = index_songs(songs);
    compute_best_results_by(|id| index.get(id).copied(), results, is_append)
}

pub fn is_append(result: &PlayResult) -> bool {
    result.music_difficulty == Difficulty::Append
}

/// 四舍五入，0.5 向上取整
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// 总分：每条 R 先各自取整再求和
pub fn compute_total_score(statuses: &[MusicDifficultyStatus]) -> i64 {
    statuses.iter().map(|s| round_half_up(s.r) as i64).sum()
}

/// 两个榜单与总分
pub fn compute_rank_summary(songs: &[Song], results: &[PlayResult]) -> RankSummary {
    let index = index_songs(songs);
    summarize(|id| index.get(id).copied(), results)
}

pub fn summarize<'a, F>(find_song: F, results: &[PlayResult]) -> RankSummary
where
    F: Fn(&str) -> Option<&'a Song>,
{
    let best = compute_best_results_by(&find_song, results, |_| true);
    let append_best = compute_best_results_by(&find_song, results, is_append);
    let total = compute_total_score(&best);
    let append_total = compute_total_score(&append_best);
    log::debug!("[Best39] 总分 {total}，APPEND 总分 {append_total}");

    RankSummary {
        best,
        total,
        append_best,
        append_total,
    }
}
