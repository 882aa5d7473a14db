pub mod error;
pub mod pipeline;
pub mod render;
pub mod schedule;
pub mod validation;

pub use error::{PipelineError, Result};
pub use pipeline::{RunStats, Schedule};
pub use render::{Renderer, TemplateSource};
pub use schedule::Day;
pub use validation::{CollectingSink, TracingSink, Verdict, WarningSink};
