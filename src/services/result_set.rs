use std::collections::HashMap;

use crate::models::{Difficulty, PlayResult};

type ChartKey = (String, Difficulty);

fn chart_key(result: &PlayResult) -> ChartKey {
    (result.music_id.clone(), result.music_difficulty)
}

/// 把新成绩合并进已有成绩集：同一谱面用新成绩覆盖并保留原有位置与创建时间，
/// 新谱面按输入顺序追加到末尾。
pub fn merge_results(current: Vec<PlayResult>, incoming: Vec<PlayResult>) -> Vec<PlayResult> {
    let mut merged = dedup_results(current);
    let mut positions: HashMap<ChartKey, usize> = merged
        .iter()
        .enumerate()
        .map(|(i, r)| (chart_key(r), i))
        .collect();

    let (mut replaced, mut appended) = (0usize, 0usize);
    for result in incoming {
        match positions.get(&chart_key(&result)) {
            Some(&i) => {
                let created_at = merged[i].created_at;
                merged[i] = PlayResult { created_at, ..result };
                replaced += 1;
            }
            None => {
                positions.insert(chart_key(&result), merged.len());
                merged.push(result);
                appended += 1;
            }
        }
    }

    log::debug!("[合并成绩] 覆盖 {replaced} 条，新增 {appended} 条，合计 {} 条", merged.len());
    merged
}

/// 去除重复谱面，后写入的覆盖先写入的，位置取首次出现处
pub fn dedup_results(results: Vec<PlayResult>) -> Vec<PlayResult> {
    let mut positions: HashMap<ChartKey, usize> = HashMap::with_capacity(results.len());
    let mut deduped: Vec<PlayResult> = Vec::with_capacity(results.len());

    for result in results {
        match positions.get(&chart_key(&result)) {
            Some(&i) => deduped[i] = result,
            None => {
                positions.insert(chart_key(&result), deduped.len());
                deduped.push(result);
            }
        }
    }
    deduped
}
