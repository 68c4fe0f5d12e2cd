pub mod service;

pub use crate::domain::model::{Coordinates, Heading, Movement, MowerStatus, PlateauId};
pub use crate::domain::ports::{ConfigProvider, IdGenerator, Storage};
pub use crate::utils::error::Result;
pub use service::MowerService;
