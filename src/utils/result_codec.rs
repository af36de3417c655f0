//! 分享码编解码
//!
//! 每首歌占 12 位：六个难度各 2 位（0 无成绩、1 Clear、2 FC、3 AP），
//! EASY 在最高位，APPEND 在最低位。12 位拆成两个 6 位组，各映射为标准
//! base64 字母表中的一个字符（不带填充）。歌曲ID从 1 到 `max_id` 依次排列，
//! 因此编码长度恒为 `2 * max_id`。
//!
//! 编码只保留档位，分数与时间戳不会被保留。

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::{Difficulty, PlayResult, ResultTier};

static SYMBOLS: Lazy<Vec<char>> =
    Lazy::new(|| base64::alphabet::STANDARD.as_str().chars().collect());

static SYMBOL_VALUES: Lazy<HashMap<char, u16>> = Lazy::new(|| {
    SYMBOLS
        .iter()
        .enumerate()
        .map(|(value, c)| (*c, value as u16))
        .collect()
});

fn shift_of(difficulty: Difficulty) -> u16 {
    2 * (5 - difficulty.index() as u16)
}

/// 只接受规范写法的十进制ID，"03"、"+3" 这类写法解码后无法还原，视为非法。
fn parse_id(music_id: &str) -> Option<u32> {
    let id: u32 = music_id.parse().ok()?;
    (id.to_string() == music_id).then_some(id)
}

/// 把成绩集编码为分享码。ID 不是数字、为 0 或超过 `max_id` 的成绩会被忽略；
/// 同一谱面出现多次时以最后一条为准。
pub fn encode(results: &[PlayResult], max_id: u32) -> String {
    let mut packed = vec![0u16; max_id as usize];
    let mut omitted = 0usize;

    for result in results {
        let slot = match parse_id(&result.music_id) {
            Some(id) if (1..=max_id).contains(&id) => &mut packed[(id - 1) as usize],
            _ => {
                omitted += 1;
                continue;
            }
        };
        let shift = shift_of(result.music_difficulty);
        *slot = (*slot & !(0b11 << shift)) | (result.play_result.state() << shift);
    }

    if omitted > 0 {
        log::debug!("[分享码] {omitted} 条成绩超出 1..={max_id} 的ID范围，未编码");
    }

    let mut encoded = String::with_capacity(packed.len() * 2);
    for value in packed {
        encoded.push(SYMBOLS[(value >> 6) as usize]);
        encoded.push(SYMBOLS[(value & 0x3F) as usize]);
    }
    encoded
}

/// 解码分享码，时间戳取当前时间
pub fn decode(encoded: &str) -> Vec<PlayResult> {
    decode_at(encoded, Utc::now())
}

/// 解码分享码，所有成绩的时间戳设为 `now`，分数为 0。
///
/// 含非法字符的字符对会被跳过，末尾落单的字符被忽略，不会返回错误。
pub fn decode_at(encoded: &str, now: DateTime<Utc>) -> Vec<PlayResult> {
    let chars: Vec<char> = encoded.chars().collect();
    let mut results = Vec::new();
    let mut skipped = 0usize;

    for (index, pair) in chars.chunks_exact(2).enumerate() {
        let (Some(&high), Some(&low)) = (SYMBOL_VALUES.get(&pair[0]), SYMBOL_VALUES.get(&pair[1]))
        else {
            skipped += 1;
            continue;
        };
        let value = (high << 6) | low;
        let music_id = (index + 1).to_string();

        for difficulty in Difficulty::ALL {
            let state = (value >> shift_of(difficulty)) & 0b11;
            if let Some(tier) = ResultTier::from_state(state) {
                results.push(PlayResult::new(music_id.clone(), difficulty, tier, now));
            }
        }
    }

    log::debug!(
        "[分享码] 解码长度 {}，得到 {} 条成绩，跳过 {skipped} 组非法字符",
        chars.len(),
        results.len()
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::BTreeSet;

    fn at() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
    }

    fn result(id: &str, difficulty: Difficulty, tier: ResultTier) -> PlayResult {
        PlayResult::new(id, difficulty, tier, at())
    }

    fn keys(results: &[PlayResult]) -> BTreeSet<(String, Difficulty, ResultTier)> {
        results
            .iter()
            .map(|r| (r.music_id.clone(), r.music_difficulty, r.play_result))
            .collect()
    }

    #[test]
    fn single_append_all_perfect() {
        let input = vec![result("3", Difficulty::Append, ResultTier::FullPerfect)];
        let encoded = encode(&input, 3);
        assert_eq!(encoded, "AAAAAD");

        let decoded = decode_at(&encoded, at());
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].music_id, "3");
        assert_eq!(decoded[0].music_difficulty, Difficulty::Append);
        assert_eq!(decoded[0].play_result, ResultTier::FullPerfect);
        assert_eq!(decoded[0].score, 0.0);
        assert_eq!(decoded[0].created_at, at());
        assert_eq!(decoded[0].updated_at, at());
    }

    #[test]
    fn easy_occupies_the_highest_bits() {
        let encoded = encode(&[result("1", Difficulty::Easy, ResultTier::Clear)], 1);
        // 1 << 10 = 0b010000_000000
        assert_eq!(encoded, "QA");
        let all_ap: Vec<PlayResult> = Difficulty::ALL
            .iter()
            .map(|d| result("1", *d, ResultTier::FullPerfect))
            .collect();
        assert_eq!(encode(&all_ap, 1), "//");
    }

    #[test]
    fn length_is_twice_max_id() {
        assert_eq!(encode(&[], 0), "");
        assert_eq!(encode(&[], 250).len(), 500);
    }

    #[test]
    fn round_trip_keeps_tiers_only() {
        let mut input = vec![
            result("1", Difficulty::Master, ResultTier::FullCombo),
            result("1", Difficulty::Expert, ResultTier::FullPerfect),
            result("2", Difficulty::Easy, ResultTier::Clear),
            result("7", Difficulty::Append, ResultTier::FullCombo),
            result("10", Difficulty::Hard, ResultTier::Clear),
            result("10", Difficulty::Normal, ResultTier::FullPerfect),
        ];
        input[0].score = 987_654.0;

        let decoded = decode_at(&encode(&input, 10), at());
        assert_eq!(keys(&decoded), keys(&input));
        assert!(decoded.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn ids_outside_range_are_omitted() {
        let input = vec![
            result("0", Difficulty::Master, ResultTier::Clear),
            result("4", Difficulty::Master, ResultTier::Clear),
            result("abc", Difficulty::Master, ResultTier::Clear),
            result("2", Difficulty::Master, ResultTier::Clear),
        ];
        let decoded = decode_at(&encode(&input, 3), at());
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].music_id, "2");
    }

    #[test]
    fn non_canonical_ids_are_omitted() {
        let input = vec![
            result("3", Difficulty::Master, ResultTier::Clear),
            result("03", Difficulty::Master, ResultTier::FullPerfect),
            result("+3", Difficulty::Expert, ResultTier::FullPerfect),
            result(" 3", Difficulty::Hard, ResultTier::FullPerfect),
        ];
        let decoded = decode_at(&encode(&input, 3), at());
        assert_eq!(keys(&decoded), keys(&input[..1]));

        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id("012"), None);
        assert_eq!(parse_id("0"), Some(0));
    }

    #[test]
    fn later_entry_for_same_chart_wins() {
        let input = vec![
            result("1", Difficulty::Master, ResultTier::FullPerfect),
            result("1", Difficulty::Master, ResultTier::Clear),
        ];
        let decoded = decode_at(&encode(&input, 1), at());
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].play_result, ResultTier::Clear);
    }

    #[test]
    fn invalid_pairs_are_skipped_and_odd_tail_ignored() {
        // 第二组含非法字符，末尾的 "Q" 落单
        let decoded = decode_at("AD*AADQ", at());
        let ids: Vec<&str> = decoded.iter().map(|r| r.music_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn garbage_decodes_to_nothing() {
        assert!(decode_at("", at()).is_empty());
        assert!(decode_at("?", at()).is_empty());
        assert!(decode_at("é漢字!", at()).is_empty());
    }

    #[test]
    fn decode_output_is_ordered() {
        let decoded = decode_at("//", at());
        let difficulties: Vec<Difficulty> = decoded.iter().map(|r| r.music_difficulty).collect();
        assert_eq!(difficulties, Difficulty::ALL.to_vec());
    }
}
