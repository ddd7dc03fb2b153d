pub mod failing_footprint;
pub mod fixed_footprint;
pub mod scripted_footprint;

pub use failing_footprint::FailingFootprint;
pub use fixed_footprint::FixedFootprint;
pub use scripted_footprint::ScriptedFootprint;
