pub mod classifier;
pub mod providers;
pub mod resolver;
