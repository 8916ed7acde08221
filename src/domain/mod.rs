// Domain layer: the dependency model and the ports the pipeline is wired through.

pub mod model;
pub mod ports;
