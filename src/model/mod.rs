pub mod command;
pub mod registry;
pub mod traits;

pub use command::CommandModel;
pub use registry::{ModelFactory, ModelRegistry};
pub use traits::{FnModel, ModelClient, DEFAULT_MAX_OUTPUT_TOKENS};
