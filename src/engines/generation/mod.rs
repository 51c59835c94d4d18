pub mod evolution_engine;
pub mod genome;
pub mod operators;
pub mod progress;

pub use evolution_engine::{next_population, EvolutionEngine, ProgressCallback};
pub use genome::InstructionSet;
pub use operators::{rank_members, select_survivors};
pub use progress::{ChannelProgressCallback, LogProgressCallback, ProgressMessage};
