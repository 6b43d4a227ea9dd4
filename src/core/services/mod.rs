pub mod board;
pub mod config;
pub mod reorder;

pub use board::Board;
pub use config::BoardConfig;
pub use reorder::array_move;
