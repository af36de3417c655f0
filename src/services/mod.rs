pub mod rank;
pub mod result_set;
pub mod song;

// 重新导出主要的服务结构体，以便可以直接从 services 模块导入
pub use rank::RankService;
pub use song::SongService;
