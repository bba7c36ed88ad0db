//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::PlannerPaths;
pub use settings::Settings;
