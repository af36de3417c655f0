pub mod data_loader;
pub mod error;
pub mod rank_utils;
pub mod result_codec;
