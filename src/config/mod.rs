pub mod evolution;
pub mod manager;
pub mod model;
pub mod task;
pub mod traits;

pub use evolution::EvolutionConfig;
pub use manager::{AppConfig, ConfigManager};
pub use model::ModelConfig;
pub use task::TaskConfig;
pub use traits::ConfigSection;
