pub mod api;
pub mod difficulty;
pub mod play_result;
pub mod song;
pub mod status;

pub use api::*;
pub use difficulty::*;
pub use play_result::*;
pub use song::*;
pub use status::*;
