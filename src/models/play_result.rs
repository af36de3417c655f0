use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::difficulty::Difficulty;
use crate::models::status::Rank;

/// 游玩结果档位，按严格程度递增
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResultTier {
    Clear,
    FullCombo,
    FullPerfect,
}

impl ResultTier {
    /// 分享码中使用的 2 位状态值（0 保留给“无成绩”）
    pub fn state(self) -> u16 {
        match self {
            ResultTier::Clear => 1,
            ResultTier::FullCombo => 2,
            ResultTier::FullPerfect => 3,
        }
    }

    pub fn from_state(state: u16) -> Option<Self> {
        match state {
            1 => Some(ResultTier::Clear),
            2 => Some(ResultTier::FullCombo),
            3 => Some(ResultTier::FullPerfect),
            _ => None,
        }
    }

    pub fn rank(self) -> Rank {
        match self {
            ResultTier::FullPerfect => Rank::P,
            ResultTier::FullCombo => Rank::F,
            ResultTier::Clear => Rank::C,
        }
    }
}

/// 单个谱面（歌曲 + 难度）的游玩结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayResult {
    pub music_id: String,
    pub music_difficulty: Difficulty,
    pub play_result: ResultTier,
    #[serde(default)]
    pub score: f64,
    #[serde(with = "chrono::serde::ts_milliseconds", default = "Utc::now")]
    #[schema(value_type = i64)]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds", default = "Utc::now")]
    #[schema(value_type = i64)]
    pub updated_at: DateTime<Utc>,
}

impl PlayResult {
    pub fn new(
        music_id: impl Into<String>,
        music_difficulty: Difficulty,
        play_result: ResultTier,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            music_id: music_id.into(),
            music_difficulty,
            play_result,
            score: 0.0,
            created_at: at,
            updated_at: at,
        }
    }

    /// 结果集中的唯一键
    pub fn key(&self) -> (&str, Difficulty) {
        (self.music_id.as_str(), self.music_difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_with_millisecond_timestamps() {
        let json = r#"{
            "musicId": "12",
            "musicDifficulty": "expert",
            "playResult": "full_combo",
            "score": 1234567,
            "createdAt": 1700000000000,
            "updatedAt": 1700000005000
        }"#;
        let result: PlayResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.music_id, "12");
        assert_eq!(result.music_difficulty, Difficulty::Expert);
        assert_eq!(result.play_result, ResultTier::FullCombo);
        assert_eq!(result.created_at.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(result.updated_at.timestamp_millis(), 1_700_000_005_000);

        let back = serde_json::to_value(&result).unwrap();
        assert_eq!(back["updatedAt"], 1_700_000_005_000i64);
        assert_eq!(back["playResult"], "full_combo");
    }

    #[test]
    fn tier_states_cover_two_bits() {
        for tier in [ResultTier::Clear, ResultTier::FullCombo, ResultTier::FullPerfect] {
            assert_eq!(ResultTier::from_state(tier.state()), Some(tier));
        }
        assert_eq!(ResultTier::from_state(0), None);
        assert!(ResultTier::Clear < ResultTier::FullPerfect);
    }
}
