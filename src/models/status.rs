use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::difficulty::Difficulty;

/// 评级：P = All Perfect, F = Full Combo, C = Clear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Rank {
    P,
    F,
    C,
}

impl Rank {
    /// 评级系数
    pub fn multiplier(self) -> f64 {
        match self {
            Rank::P => 8.0,
            Rank::F => 7.5,
            Rank::C => 5.0,
        }
    }
}

/// 单个谱面的计算结果，每次聚合时重新生成
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MusicDifficultyStatus {
    pub music_id: String,
    pub difficulty: Difficulty,
    /// 实际参与计算的等级（可能是精确定数）
    pub level: f64,
    /// 名义等级，仅用于展示
    pub base_level: f64,
    pub rank: Rank,
    pub r: f64,
    pub title: String,
    pub title_en: String,
    /// 等级是否来自精确定数
    pub exact: bool,
}

/// 综合与 APPEND 两个榜单及其总分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankSummary {
    pub best: Vec<MusicDifficultyStatus>,
    pub total: i64,
    pub append_best: Vec<MusicDifficultyStatus>,
    pub append_total: i64,
}
