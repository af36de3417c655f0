use std::collections::HashMap;

use crate::models::{CatalogSummary, Song};
use crate::utils::error::{AppError, AppResult};

// 歌曲服务，持有启动时加载的只读曲库
#[derive(Debug, Clone, Default)]
pub struct SongService {
    songs: Vec<Song>,
    index: HashMap<String, usize>,
    max_id: u32,
}

impl SongService {
    pub fn new(songs: Vec<Song>) -> Self {
        let mut index = HashMap::with_capacity(songs.len());
        for (i, song) in songs.iter().enumerate() {
            // 重复ID以先出现的为准
            if index.contains_key(&song.id) {
                log::warn!("曲库中存在重复的歌曲ID: {}", song.id);
                continue;
            }
            index.insert(song.id.clone(), i);
        }
        let max_id = songs.iter().filter_map(Song::numeric_id).max().unwrap_or(0);
        log::debug!("已建立 ID->歌曲 映射，共 {} 条，最大ID {max_id}", index.len());

        Self { songs, index, max_id }
    }

    pub fn get(&self, id: &str) -> Option<&Song> {
        self.index.get(id).map(|&i| &self.songs[i])
    }

    pub fn get_song(&self, id: &str) -> AppResult<Song> {
        self.get(id)
            .cloned()
            .ok_or_else(|| AppError::SongNotFound(id.to_string()))
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// 曲库中最大的数字ID，分享码编码的默认上界
    pub fn max_id(&self) -> u32 {
        self.max_id
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            count: self.len(),
            max_id: self.max_id,
        }
    }
}
