use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::difficulty::Difficulty;
use crate::models::status::Rank;

/// 六个难度槽位的等级，`null` 与缺失都视为该难度不存在，`0` 是合法等级
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SongLevels {
    #[serde(default)]
    pub easy: Option<f64>,
    #[serde(default)]
    pub normal: Option<f64>,
    #[serde(default)]
    pub hard: Option<f64>,
    #[serde(default)]
    pub expert: Option<f64>,
    #[serde(default)]
    pub master: Option<f64>,
    #[serde(default)]
    pub append: Option<f64>,
}

impl SongLevels {
    pub fn get(&self, difficulty: Difficulty) -> Option<f64> {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Normal => self.normal,
            Difficulty::Hard => self.hard,
            Difficulty::Expert => self.expert,
            Difficulty::Master => self.master,
            Difficulty::Append => self.append,
        }
    }
}

/// 曲库中的一首歌曲（只读）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Song {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub levels: SongLevels,
    // 精确定数：按难度与评级区分
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mas_ap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mas_fc: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apd_ap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apd_fc: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp_ap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp_fc: Option<f64>,
    /// EXPERT 难度的通用精确定数，不区分评级
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<f64>,
}

impl Song {
    /// 指定难度与评级对应的精确定数。只有 EXPERT/MASTER/APPEND 的 AP 与 FC 有定义。
    pub fn rank_constant(&self, difficulty: Difficulty, rank: Rank) -> Option<f64> {
        match (difficulty, rank) {
            (Difficulty::Master, Rank::P) => self.mas_ap,
            (Difficulty::Master, Rank::F) => self.mas_fc,
            (Difficulty::Append, Rank::P) => self.apd_ap,
            (Difficulty::Append, Rank::F) => self.apd_fc,
            (Difficulty::Expert, Rank::P) => self.exp_ap,
            (Difficulty::Expert, Rank::F) => self.exp_fc,
            _ => None,
        }
    }

    /// 歌曲ID的数值形式。非数字或非规范写法（如 "03"）的ID返回 None
    pub fn numeric_id(&self) -> Option<u32> {
        let id: u32 = self.id.parse().ok()?;
        (id.to_string() == self.id).then_some(id)
    }
}

/// 曲库概要
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub count: usize,
    pub max_id: u32,
}
