pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod trading;

pub use config::PipelineConfig;
pub use error::{PipelineError, PipelineResult};
pub use trading::performance::pipeline::Pipeline;
