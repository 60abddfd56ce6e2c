pub mod merge;
pub mod placement;
pub mod progress;
pub mod reset;
pub mod scheduler;
pub mod session;
