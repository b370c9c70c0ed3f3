// Domain layer: plain value types and the output port. No logic beyond constructors.

pub mod model;
pub mod ports;
