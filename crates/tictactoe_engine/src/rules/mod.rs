//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from board storage so the engine, the computer opponent and callers
//! all evaluate positions the same way.

mod consistency;
mod draw;
mod status;
mod win;

pub use consistency::validate_initial_board;
pub use draw::is_full;
pub use status::compute_status;
pub(crate) use status::status_of;
pub use win::{LINES, check_winner, winning_line};
