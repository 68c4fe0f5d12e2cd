use crate::adapters::ids::UuidGenerator;
use crate::domain::model::{Coordinates, Heading, Movement, MowerId, MowerStatus, PlateauId};
use crate::domain::mower::Mower;
use crate::domain::plateau::Plateau;
use crate::domain::ports::IdGenerator;
use crate::utils::error::{MowerError, Result};
use std::collections::HashMap;

/// Registry of plateaus and the mowers placed on them.
///
/// Plateaus live in an arena indexed by [`PlateauId`]; each mower keeps the
/// id of its plateau, and the plateau only maps cells to mower ids.
pub struct MowerService<G: IdGenerator = UuidGenerator> {
    plateaus: Vec<Plateau>,
    mowers: HashMap<MowerId, Mower>,
    ids: G,
}

impl MowerService<UuidGenerator> {
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }
}

impl Default for MowerService<UuidGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> MowerService<G> {
    pub fn with_id_generator(ids: G) -> Self {
        Self {
            plateaus: Vec::new(),
            mowers: HashMap::new(),
            ids,
        }
    }

    /// Adds an empty plateau that several mowers can be placed on.
    pub fn create_plateau(&mut self, upper_right: &[i64]) -> Result<PlateauId> {
        let bounds = Coordinates::from_slice(upper_right)?;
        self.push_plateau(bounds)
    }

    fn push_plateau(&mut self, bounds: Coordinates) -> Result<PlateauId> {
        let plateau = Plateau::new(bounds.x, bounds.y)?;
        let id = PlateauId(self.plateaus.len());
        self.plateaus.push(plateau);

        tracing::debug!("Created plateau {} with upper-right corner {}", id.index(), bounds);
        Ok(id)
    }

    /// Creates a mower on a plateau of its own and returns its identifier.
    pub fn create_mower(
        &mut self,
        heading: &str,
        coordinates: &[i64],
        upper_right: &[i64],
    ) -> Result<String> {
        // 先驗證所有參數，失敗時不建立任何 plateau
        let heading = Heading::from_code(heading)?;
        let location = Coordinates::from_slice(coordinates)?;
        let bounds = Coordinates::from_slice(upper_right)?;

        let plateau = self.push_plateau(bounds)?;
        match self.place_mower(plateau, heading, location) {
            Ok(id) => Ok(id),
            Err(e) => {
                self.plateaus.pop();
                Err(e)
            }
        }
    }

    /// Creates a mower on an existing plateau and returns its identifier.
    pub fn create_mower_on_plateau(
        &mut self,
        plateau: PlateauId,
        heading: &str,
        coordinates: &[i64],
    ) -> Result<String> {
        let heading = Heading::from_code(heading)?;
        let location = Coordinates::from_slice(coordinates)?;
        self.place_mower(plateau, heading, location)
    }

    fn place_mower(
        &mut self,
        plateau_id: PlateauId,
        heading: Heading,
        location: Coordinates,
    ) -> Result<String> {
        let plateau = self
            .plateaus
            .get_mut(plateau_id.index())
            .ok_or(MowerError::PlateauNotFound {
                id: plateau_id.index(),
            })?;

        let id = MowerId::new(self.ids.generate());
        if self.mowers.contains_key(&id) {
            return Err(MowerError::invalid_argument(format!(
                "Mower id '{}' is already in use",
                id
            )));
        }

        let mower = Mower::new(id, location, heading, plateau_id);
        plateau.register_mower(&mower)?;
        self.mowers.insert(id, mower);

        tracing::info!(
            "Placed mower '{}' at {} heading {} on plateau {}",
            id,
            location,
            heading,
            plateau_id.index()
        );
        Ok(id.to_string())
    }

    /// Makes a mower follow a path such as `LMLMLMLMM`.
    ///
    /// `L` and `R` spin the mower 90 degrees without moving it; `M` moves it one
    /// cell forward. The whole string is parsed before anything moves. The first
    /// rejected move stops the sequence and is returned as is.
    pub fn send_instructions(&mut self, mower_id: &str, instructions: &str) -> Result<()> {
        self.resolve(mower_id)?;
        let movements = Movement::parse_sequence(instructions)?;
        self.apply_movements(mower_id, &movements)
    }

    /// Same as [`MowerService::send_instructions`] for already parsed movements.
    pub fn apply_movements(&mut self, mower_id: &str, movements: &[Movement]) -> Result<()> {
        let id = self.resolve(mower_id)?;

        let mower = self
            .mowers
            .get_mut(&id)
            .ok_or_else(|| MowerError::MowerNotFound {
                id: mower_id.to_string(),
            })?;
        let plateau = self
            .plateaus
            .get_mut(mower.plateau().index())
            .ok_or(MowerError::PlateauNotFound {
                id: mower.plateau().index(),
            })?;

        for &movement in movements {
            tracing::debug!("Sending mower '{}' instruction '{}'", id, movement.code());
            if let Err(e) = mower.apply(movement, plateau) {
                tracing::warn!("Mower '{}' rejected instruction '{}': {}", id, movement.code(), e);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Current position of a mower as `"<x> <y> <heading>"`, e.g. `1 2 N`.
    pub fn get_mower_status(&self, mower_id: &str) -> Result<String> {
        self.mower_status(mower_id).map(|status| status.to_string())
    }

    pub fn mower_status(&self, mower_id: &str) -> Result<MowerStatus> {
        self.get_mower(mower_id).map(Mower::status)
    }

    pub fn get_mower(&self, mower_id: &str) -> Result<&Mower> {
        let id = self.resolve(mower_id)?;
        Ok(&self.mowers[&id])
    }

    pub fn plateau(&self, id: PlateauId) -> Option<&Plateau> {
        self.plateaus.get(id.index())
    }

    pub fn mower_count(&self) -> usize {
        self.mowers.len()
    }

    pub fn plateau_count(&self) -> usize {
        self.plateaus.len()
    }

    fn resolve(&self, mower_id: &str) -> Result<MowerId> {
        let id: MowerId = mower_id.parse()?;
        if !self.mowers.contains_key(&id) {
            return Err(MowerError::MowerNotFound {
                id: mower_id.to_string(),
            });
        }
        Ok(id)
    }
}
