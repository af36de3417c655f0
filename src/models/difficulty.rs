use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// 谱面难度。顺序固定，分享码的位布局依赖这个顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Expert,
    Master,
    Append,
}

impl Difficulty {
    pub const ALL: [Difficulty; 6] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Expert,
        Difficulty::Master,
        Difficulty::Append,
    ];

    /// 在固定顺序中的下标（EASY = 0）
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
            Difficulty::Master => "master",
            Difficulty::Append => "append",
        }
    }

    /// 是否可能带有精确定数
    pub fn has_rank_constants(self) -> bool {
        matches!(self, Difficulty::Expert | Difficulty::Master | Difficulty::Append)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_fixed() {
        let indices: Vec<usize> = Difficulty::ALL.iter().map(|d| d.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
        assert!(Difficulty::Easy < Difficulty::Append);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Append).unwrap();
        assert_eq!(json, "\"append\"");
        let parsed: Difficulty = serde_json::from_str("\"master\"").unwrap();
        assert_eq!(parsed, Difficulty::Master);
    }
}
