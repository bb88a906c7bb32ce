// Domain layer: data model and ports (interfaces). No generation logic here.

pub mod model;
pub mod ports;
