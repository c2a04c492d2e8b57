pub mod migrate;
pub mod model;
pub mod patch;
pub mod types;
pub mod validate;
