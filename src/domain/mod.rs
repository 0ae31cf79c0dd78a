// Domain layer: value types and ports. The fee engine itself lives in `core`.

pub mod model;
pub mod ports;
