use crate::domain::model::{Coordinates, Heading, MowerId, BOTTOM_LEFT};
use crate::domain::mower::Mower;
use crate::utils::error::{MowerError, Result};
use std::collections::HashMap;

/// Bounded grid from (0, 0) to `upper_right`, both inclusive.
///
/// The plateau does not own its mowers. It only keeps which cell is held by
/// which mower id, and every forward move goes through it so that no two
/// mowers ever share a cell.
#[derive(Debug, Clone)]
pub struct Plateau {
    upper_right: Coordinates,
    occupancy: HashMap<Coordinates, MowerId>,
}

impl Plateau {
    pub fn new(upper_right_x: i64, upper_right_y: i64) -> Result<Self> {
        if upper_right_x < BOTTOM_LEFT.x || upper_right_y < BOTTOM_LEFT.y {
            return Err(MowerError::invalid_argument(format!(
                "Invalid plateau bounds '({}, {})'",
                upper_right_x, upper_right_y
            )));
        }

        Ok(Self {
            upper_right: Coordinates::new(upper_right_x, upper_right_y),
            occupancy: HashMap::new(),
        })
    }

    pub fn upper_right(&self) -> Coordinates {
        self.upper_right
    }

    pub fn contains(&self, coordinates: Coordinates) -> bool {
        (BOTTOM_LEFT.x..=self.upper_right.x).contains(&coordinates.x)
            && (BOTTOM_LEFT.y..=self.upper_right.y).contains(&coordinates.y)
    }

    pub fn occupant(&self, coordinates: Coordinates) -> Option<MowerId> {
        self.occupancy.get(&coordinates).copied()
    }

    pub fn occupied_cells(&self) -> usize {
        self.occupancy.len()
    }

    /// Places a freshly built mower on its starting cell.
    pub fn register_mower(&mut self, mower: &Mower) -> Result<()> {
        let location = mower.location();
        self.check_available(location)?;
        self.occupancy.insert(location, mower.id());
        Ok(())
    }

    /// Validates the cell in front of `current_position` and, if it is free and
    /// inside the plateau, moves the occupant there. Nothing changes on failure.
    pub fn validate_and_apply_forward_move(
        &mut self,
        current_position: Coordinates,
        heading: Heading,
    ) -> Result<Coordinates> {
        if !self.occupancy.contains_key(&current_position) {
            return Err(MowerError::NotOnPlateau {
                coordinates: current_position,
            });
        }

        // past the i64 range is necessarily past the upper-right corner
        let candidate = current_position
            .step(heading)
            .ok_or(MowerError::OutOfBounds {
                coordinates: current_position,
            })?;
        self.check_available(candidate)?;

        if let Some(id) = self.occupancy.remove(&current_position) {
            self.occupancy.insert(candidate, id);
        }
        Ok(candidate)
    }

    // bounds are checked before occupancy
    fn check_available(&self, coordinates: Coordinates) -> Result<()> {
        if !self.contains(coordinates) {
            return Err(MowerError::OutOfBounds { coordinates });
        }
        if self.occupancy.contains_key(&coordinates) {
            return Err(MowerError::PositionOccupied { coordinates });
        }
        Ok(())
    }
}
