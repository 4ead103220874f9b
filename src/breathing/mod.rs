pub mod controller;
pub mod driver;
pub mod state;

pub use controller::{BreathingController, SessionHandle};
pub use driver::{BreathOutcome, BreathingDriver};
pub use state::{BreathPhase, BreathSample, BreathingConfig};
