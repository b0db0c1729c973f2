pub mod model;
pub mod serialize;
