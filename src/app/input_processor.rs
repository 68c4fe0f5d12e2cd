use crate::adapters::ids::UuidGenerator;
use crate::core::MowerService;
use crate::domain::model::{
    Coordinates, Heading, Movement, MowerStatus, OutputFormat, PlateauMode, BOTTOM_LEFT,
};
use crate::domain::ports::IdGenerator;
use crate::utils::error::{MowerError, Result};

/// One mower block of the input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MowerPlan {
    pub position: Coordinates,
    pub heading: Heading,
    pub instructions: Vec<Movement>,
}

/// A fully tokenised input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionPlan {
    pub upper_right: Coordinates,
    pub mowers: Vec<MowerPlan>,
}

/// Tokenises the whole document before anything is simulated.
///
/// ```text
/// 5 5
/// 1 2 N
/// LMLMLMLMM
/// ```
///
/// Every failure is reported as [`MowerError::InvalidInput`] carrying the raw text.
pub fn parse_input(input: &str) -> Result<MissionPlan> {
    parse_lines(input).map_err(|e| MowerError::invalid_input(input, e))
}

fn parse_lines(input: &str) -> Result<MissionPlan> {
    let mut lines = input.lines().map(str::trim).filter(|line| !line.is_empty());

    let bounds_line = lines
        .next()
        .ok_or_else(|| MowerError::invalid_argument("Input is empty"))?;
    let upper_right = parse_bounds(bounds_line)?;

    let mut mowers = Vec::new();
    while let Some(position_line) = lines.next() {
        let (position, heading) = parse_position(position_line)?;
        let instructions = lines.next().ok_or_else(|| {
            MowerError::invalid_argument(format!(
                "Mower '{}' has no instruction line",
                position_line
            ))
        })?;
        let instructions = Movement::parse_sequence(instructions)?;

        mowers.push(MowerPlan {
            position,
            heading,
            instructions,
        });
    }

    Ok(MissionPlan {
        upper_right,
        mowers,
    })
}

fn parse_bounds(line: &str) -> Result<Coordinates> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x, y] = tokens.as_slice() else {
        return Err(MowerError::invalid_argument(format!(
            "Expected plateau bounds 'x y', got '{}'",
            line
        )));
    };

    let bounds = Coordinates::parse(x, y)?;
    if bounds.x < BOTTOM_LEFT.x || bounds.y < BOTTOM_LEFT.y {
        return Err(MowerError::invalid_argument(format!(
            "Plateau bounds must not be negative, got '{}'",
            line
        )));
    }
    Ok(bounds)
}

fn parse_position(line: &str) -> Result<(Coordinates, Heading)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x, y, heading] = tokens.as_slice() else {
        return Err(MowerError::invalid_argument(format!(
            "Expected mower position 'x y H', got '{}'",
            line
        )));
    };

    Ok((Coordinates::parse(x, y)?, Heading::from_code(heading)?))
}

/// Drives a [`MowerService`] from parsed documents.
pub struct InputProcessor<G: IdGenerator = UuidGenerator> {
    service: MowerService<G>,
    mode: PlateauMode,
}

impl InputProcessor<UuidGenerator> {
    pub fn new(mode: PlateauMode) -> Self {
        Self::with_service(MowerService::new(), mode)
    }
}

impl<G: IdGenerator> InputProcessor<G> {
    pub fn with_service(service: MowerService<G>, mode: PlateauMode) -> Self {
        Self { service, mode }
    }

    pub fn service(&self) -> &MowerService<G> {
        &self.service
    }

    /// Creates and moves each mower in document order, one at a time.
    ///
    /// Movement failures are returned unchanged; they are not input errors.
    pub fn run(&mut self, plan: &MissionPlan) -> Result<Vec<MowerStatus>> {
        let bounds = [plan.upper_right.x, plan.upper_right.y];
        let shared = match self.mode {
            PlateauMode::Shared => Some(self.service.create_plateau(&bounds)?),
            PlateauMode::Isolated => None,
        };

        let mut statuses = Vec::with_capacity(plan.mowers.len());
        for mower in &plan.mowers {
            let heading = mower.heading.code().to_string();
            let position = [mower.position.x, mower.position.y];

            let mower_id = match shared {
                Some(plateau) => self
                    .service
                    .create_mower_on_plateau(plateau, &heading, &position)?,
                None => self.service.create_mower(&heading, &position, &bounds)?,
            };

            self.service.apply_movements(&mower_id, &mower.instructions)?;
            statuses.push(self.service.mower_status(&mower_id)?);
        }

        tracing::info!("Simulated {} mower(s) in {:?} mode", statuses.len(), self.mode);
        Ok(statuses)
    }

    pub fn process(&mut self, input: &str) -> Result<Vec<MowerStatus>> {
        let plan = parse_input(input)?;
        self.run(&plan)
    }
}

/// Runs a document on one shared plateau and returns one `x y H` line per mower.
pub fn process_input(input: &str) -> Result<String> {
    process_input_with(input, PlateauMode::Shared)
}

pub fn process_input_with(input: &str, mode: PlateauMode) -> Result<String> {
    let statuses = InputProcessor::new(mode).process(input)?;
    render_report(&statuses, OutputFormat::Text)
}

pub fn render_report(statuses: &[MowerStatus], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(statuses
            .iter()
            .map(|status| format!("{}\n", status))
            .collect()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(statuses)?;
            json.push('\n');
            Ok(json)
        }
    }
}
