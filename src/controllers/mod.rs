pub mod health;
pub mod rank;
pub mod results;
pub mod share;
pub mod song;

pub use health::health_check;
pub use rank::{get_bn, get_rank};
pub use results::merge_results;
pub use share::{decode_share, encode_share};
pub use song::{get_catalog, get_song};
