// Domain layer: the canonical vacancy model and the ports the core drives.

pub mod model;
pub mod ports;
