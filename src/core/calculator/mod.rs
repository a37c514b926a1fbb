pub mod classifier;
pub mod exit;
pub mod presence;
