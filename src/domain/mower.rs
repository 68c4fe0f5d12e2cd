use crate::domain::model::{rotate, Coordinates, Heading, Movement, MowerId, MowerStatus, PlateauId};
use crate::domain::plateau::Plateau;
use crate::utils::error::{MowerError, Result};

/// A mower placed on one plateau.
///
/// Building a mower has no side effects: it must be handed to
/// [`Plateau::register_mower`] before it can move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mower {
    id: MowerId,
    location: Coordinates,
    heading: Heading,
    plateau: PlateauId,
}

impl Mower {
    pub fn new(id: MowerId, location: Coordinates, heading: Heading, plateau: PlateauId) -> Self {
        Self {
            id,
            location,
            heading,
            plateau,
        }
    }

    pub fn id(&self) -> MowerId {
        self.id
    }

    pub fn location(&self) -> Coordinates {
        self.location
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn plateau(&self) -> PlateauId {
        self.plateau
    }

    /// Applies one instruction. Rotations always succeed; a forward move is
    /// validated by `plateau` and leaves the mower untouched when rejected.
    pub fn apply(&mut self, movement: Movement, plateau: &mut Plateau) -> Result<()> {
        match movement.rotation() {
            Some(rotation) => self.heading = rotate(self.heading, rotation),
            None => {
                if plateau.occupant(self.location) != Some(self.id) {
                    return Err(MowerError::NotOnPlateau {
                        coordinates: self.location,
                    });
                }
                self.location = plateau.validate_and_apply_forward_move(self.location, self.heading)?;
            }
        }
        Ok(())
    }

    pub fn status(&self) -> MowerStatus {
        MowerStatus {
            x: self.location.x,
            y: self.location.y,
            heading: self.heading,
        }
    }
}
