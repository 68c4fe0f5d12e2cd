use anyhow::Result;
use plateau_mowers::utils::validation::Validate;
use plateau_mowers::{
    process_input, process_input_with, CliConfig, LocalStorage, MissionRunner, MowerError,
    MowerStatus, OutputFormat, PlateauMode, TomlConfig,
};
use std::fs;
use tempfile::TempDir;

const REFERENCE: &str = "5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM\n";

#[test]
fn test_reference_mission() {
    assert_eq!(process_input(REFERENCE).unwrap(), "1 3 N\n5 1 E\n");
}

#[test]
fn test_leaving_the_plateau_fails() {
    for input in ["5 5\n0 0 S\nM\n", "5 5\n0 0 W\nM\n", "5 5\n5 5 N\nM\n"] {
        let err = process_input(input).unwrap_err();
        assert!(
            matches!(err, MowerError::OutOfBounds { .. }),
            "unexpected error for {:?}: {}",
            input,
            err
        );
    }
}

#[test]
fn test_leaving_a_maximal_plateau_fails() {
    let input = "9223372036854775807 0\n9223372036854775807 0 E\nM\n";
    let err = process_input(input).unwrap_err();
    assert!(matches!(err, MowerError::OutOfBounds { .. }));

    let input = "9223372036854775807 9223372036854775807\n3 9223372036854775807 N\nLLRRM\n";
    assert!(matches!(
        process_input(input),
        Err(MowerError::OutOfBounds { .. })
    ));
}

#[test]
fn test_collision_on_shared_plateau() {
    let input = "5 5\n2 3 N\nR\n2 2 N\nM\n";

    let err = process_input_with(input, PlateauMode::Shared).unwrap_err();
    assert_eq!(err.to_string(), "'(2, 3)' already occupied");

    assert_eq!(
        process_input_with(input, PlateauMode::Isolated).unwrap(),
        "2 3 E\n2 3 N\n"
    );
}

#[test]
fn test_cell_freed_by_earlier_mower_can_be_entered() {
    let input = "5 5\n2 3 N\nM\n2 2 N\nM\n";
    assert_eq!(process_input(input).unwrap(), "2 4 N\n2 3 N\n");
}

#[test]
fn test_invalid_documents_are_invalid_input() {
    for input in ["", "asdasd", "5 5\n12312", "5 5\n1 2 3\nLMLMLMLMM\n"] {
        assert!(matches!(
            process_input(input),
            Err(MowerError::InvalidInput { .. })
        ));
    }
}

#[test]
fn test_runner_with_files_and_toml() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path();
    fs::write(base.join("mission.txt"), REFERENCE)?;

    let toml_path = base.join("mowers.toml");
    fs::write(
        &toml_path,
        r#"
[simulation]
plateau_mode = "shared"

[input]
path = "mission.txt"

[output]
path = "reports/mission.json"
format = "json"
"#,
    )?;

    let toml = TomlConfig::from_file(&toml_path)?;
    toml.validate()?;

    let mut config = CliConfig::default();
    config.merge_toml(&toml);

    let storage = LocalStorage::new(base.to_str().unwrap().to_string());
    let runner = MissionRunner::new(storage, config);
    runner.run()?;

    let written = fs::read_to_string(base.join("reports/mission.json"))?;
    let statuses: Vec<MowerStatus> = serde_json::from_str(&written)?;
    let lines: Vec<String> = statuses.iter().map(ToString::to_string).collect();
    assert_eq!(lines, vec!["1 3 N", "5 1 E"]);

    Ok(())
}

#[test]
fn test_runner_text_output_to_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path();
    fs::write(base.join("mission.txt"), REFERENCE)?;

    let config = CliConfig {
        input: Some("mission.txt".to_string()),
        output: Some("out.txt".to_string()),
        format: Some(OutputFormat::Text),
        ..CliConfig::default()
    };
    let runner = MissionRunner::new(LocalStorage::new(base.to_str().unwrap().to_string()), config);

    assert_eq!(runner.run()?, "1 3 N\n5 1 E\n");
    assert_eq!(fs::read_to_string(base.join("out.txt"))?, "1 3 N\n5 1 E\n");

    Ok(())
}
