pub mod input_processor;
pub mod mission;

pub use input_processor::{parse_input, process_input, process_input_with, InputProcessor, MissionPlan, MowerPlan};
pub use mission::MissionRunner;
