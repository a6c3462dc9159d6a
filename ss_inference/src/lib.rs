pub mod encoder;
pub mod error;
pub mod model;
pub mod runner;
pub mod utils;
