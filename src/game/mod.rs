//! Game logic: letter catalog, shop, board scoring and the session economy

pub mod board;
pub mod catalog;
pub mod dictionary;
pub mod economy;
pub mod evaluator;
pub mod sampler;
pub mod shop;

/// Rows and columns on the board.
pub const GRID_SIZE: usize = 7;

/// Slots in the shop.
pub const SHOP_SIZE: usize = 7;

pub use board::BoardCell;
pub use dictionary::WordList;
pub use economy::{EconomyRules, GameSession, Rejection};
pub use evaluator::{CellMark, Direction};
pub use sampler::{seeded_rng, today_seed};
pub use shop::Shop;
