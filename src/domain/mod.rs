// Domain layer: core models and ports (interfaces). Only std, rust_decimal and thiserror.

pub mod model;
pub mod ports;
