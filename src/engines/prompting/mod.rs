pub mod builder;
pub mod parser;

pub use builder::PromptBuilder;
pub use parser::{parse_instruction_list, parse_tagged};
