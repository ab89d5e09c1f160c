// Domain layer: request/result models, static catalogs and ports.

pub mod catalog;
pub mod model;
pub mod ports;
