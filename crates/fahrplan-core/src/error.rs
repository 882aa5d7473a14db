// crates/fahrplan-core/src/error.rs

use std::path::PathBuf;

use fahrplan_parser::ParserError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("failed to read schedule input")]
    Input(#[from] ParserError),

    #[error("failed to read template {}", path.display())]
    TemplateIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template error")]
    Template(#[from] tera::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
