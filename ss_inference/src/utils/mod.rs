pub mod math;
pub mod similarity;
