//! Page components for InspireFlow.

mod daily;
mod random;

pub use daily::Daily;
pub use random::Random;
