pub mod batch;
pub mod cli;
pub mod dispatch;
pub mod error;
pub mod summary;
pub mod training;
pub mod types;
pub mod utils;

pub use dispatch::read_package;
pub use error::WorkoutError;
pub use summary::{InfoMessage, render_summary};
pub use training::Training;
