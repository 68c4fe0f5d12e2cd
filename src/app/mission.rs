use crate::app::input_processor::{parse_input, render_report, InputProcessor};
use crate::core::{ConfigProvider, Storage};
use crate::domain::model::MowerStatus;
use crate::utils::error::Result;
use std::io::{Read, Write};

/// Reads a mission document, simulates it and writes the report, using the
/// locations and modes given by the configuration.
pub struct MissionRunner<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> MissionRunner<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn load(&self) -> Result<String> {
        match self.config.input_path() {
            Some(path) => {
                tracing::debug!("Reading mission from: {}", path);
                self.storage.read_file(path)
            }
            None => {
                tracing::debug!("Reading mission from stdin");
                let mut input = String::new();
                std::io::stdin().read_to_string(&mut input)?;
                Ok(input)
            }
        }
    }

    pub fn simulate(&self, input: &str) -> Result<Vec<MowerStatus>> {
        let plan = parse_input(input)?;
        tracing::info!(
            "Plateau {}x{} with {} mower(s)",
            plan.upper_right.x,
            plan.upper_right.y,
            plan.mowers.len()
        );
        InputProcessor::new(self.config.plateau_mode()).run(&plan)
    }

    pub fn publish(&self, statuses: &[MowerStatus]) -> Result<String> {
        let report = render_report(statuses, self.config.output_format())?;
        match self.config.output_path() {
            Some(path) => {
                self.storage.write_file(path, report.as_bytes())?;
                tracing::info!("Report saved to: {}", path);
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(report.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(report)
    }

    /// Load, simulate and publish in one go; returns the rendered report.
    pub fn run(&self) -> Result<String> {
        let input = self.load()?;
        let statuses = self.simulate(&input)?;
        self.publish(&statuses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{OutputFormat, PlateauMode};
    use crate::utils::error::MowerError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl MemoryStorage {
        fn with_file(path: &str, content: &str) -> Self {
            let storage = Self::default();
            storage
                .files
                .borrow_mut()
                .insert(path.to_string(), content.as_bytes().to_vec());
            storage
        }

        fn get_file(&self, path: &str) -> Option<String> {
            self.files
                .borrow()
                .get(path)
                .map(|data| String::from_utf8_lossy(data).into_owned())
        }
    }

    impl Storage for MemoryStorage {
        fn read_file(&self, path: &str) -> Result<String> {
            self.get_file(path).ok_or_else(|| {
                MowerError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files.borrow_mut().insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct TestConfig {
        mode: PlateauMode,
        format: OutputFormat,
    }

    impl ConfigProvider for TestConfig {
        fn input_path(&self) -> Option<&str> {
            Some("mission.txt")
        }

        fn output_path(&self) -> Option<&str> {
            Some("out/report.txt")
        }

        fn plateau_mode(&self) -> PlateauMode {
            self.mode
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }
    }

    #[test]
    fn test_run_writes_report() {
        let storage =
            MemoryStorage::with_file("mission.txt", "5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM\n");
        let runner = MissionRunner::new(
            storage,
            TestConfig {
                mode: PlateauMode::Shared,
                format: OutputFormat::Text,
            },
        );

        let report = runner.run().unwrap();

        assert_eq!(report, "1 3 N\n5 1 E\n");
        assert_eq!(
            runner.storage.get_file("out/report.txt").as_deref(),
            Some("1 3 N\n5 1 E\n")
        );
    }

    #[test]
    fn test_missing_input_file() {
        let runner = MissionRunner::new(
            MemoryStorage::default(),
            TestConfig {
                mode: PlateauMode::Shared,
                format: OutputFormat::Json,
            },
        );

        assert!(matches!(runner.run(), Err(MowerError::IoError(_))));
        assert!(runner.storage.get_file("out/report.txt").is_none());
    }
}
