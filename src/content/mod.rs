//! Static psychoeducation content and daily tips.

pub mod tips;
pub mod topics;

pub use tips::{random_tip, DAILY_TIPS};
pub use topics::{Topic, LEARN_MORE};
