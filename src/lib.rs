pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{LocalStorage, SequentialIdGenerator, UuidGenerator};
pub use app::{process_input, process_input_with, InputProcessor, MissionRunner};
pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::service::MowerService;
pub use domain::model::{Coordinates, Heading, Movement, MowerStatus, OutputFormat, PlateauMode};
pub use domain::{mower::Mower, plateau::Plateau};
pub use utils::error::{MowerError, Result};
