use crate::domain::model::{OutputFormat, PlateauMode};
use crate::utils::error::Result;
use uuid::Uuid;

/// Source of mower identifiers.
pub trait IdGenerator {
    fn generate(&mut self) -> Uuid;
}

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<String>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    /// `None` means standard input.
    fn input_path(&self) -> Option<&str>;
    /// `None` means standard output.
    fn output_path(&self) -> Option<&str>;
    fn plateau_mode(&self) -> PlateauMode;
    fn output_format(&self) -> OutputFormat;
}
