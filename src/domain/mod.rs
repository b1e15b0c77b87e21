// Domain layer: catalog model, the line codec and the ports the core depends on.

pub mod codec;
pub mod model;
pub mod ports;
