// Domain layer: capability contracts (ports) and the plain data they move around.

pub mod model;
pub mod ports;
