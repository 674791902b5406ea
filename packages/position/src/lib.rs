#![no_std]

pub mod types;
pub mod settle;

pub use types::StakedPosition;
pub use settle::{
    settle_position, modify_stake, calculate_pending_reward, validate_range, is_staked, is_empty,
};
