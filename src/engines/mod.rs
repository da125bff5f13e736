pub mod driver;
pub mod genetics;

pub use driver::{Driver, RunOptions};
