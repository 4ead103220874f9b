pub mod detector;
pub mod notice;

pub use detector::{CrisisCheckResult, CrisisDetector, CrisisKeywordSet};
pub use notice::{Helpline, SafetyNotice};
