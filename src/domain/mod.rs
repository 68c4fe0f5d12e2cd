// Domain layer: plateau, mower and heading algebra plus the ports the outer layers implement.

pub mod model;
pub mod mower;
pub mod plateau;
pub mod ports;
