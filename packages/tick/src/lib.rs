#![no_std]

pub mod types;
pub mod update;
pub mod growth;

pub use types::RewardTickInfo;
pub use update::{update_reward_tick, cross_reward_tick};
pub use growth::get_reward_growth_inside;

// Re-export from math
pub use belugafarm_math::is_valid_tick;
