use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use fahrplan_parser::{format_duration, format_time};
use tera::{Context, Tera, Value};
use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::schedule::Day;

pub const BUNDLED_TEMPLATE_NAME: &str = "fahrplan.html";
const BUNDLED_TEMPLATE: &str = include_str!("../templates/fahrplan.html.tera");

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateSource {
    /// The HTML schedule shipped with the crate.
    #[default]
    Bundled,
    File(PathBuf),
}

/// Renders the day list through a single Tera template.
///
/// Templates see `days`, `pretty` and the `format_time` / `format_duration`
/// helpers, available both as filters and as functions taking `minutes`.
pub struct Renderer {
    tera: Tera,
    template_name: String,
}

impl Renderer {
    pub fn new(source: &TemplateSource) -> Result<Self> {
        let (name, content) = match source {
            TemplateSource::Bundled => (
                BUNDLED_TEMPLATE_NAME.to_string(),
                Cow::Borrowed(BUNDLED_TEMPLATE),
            ),
            TemplateSource::File(path) => (template_name(path), Cow::Owned(read_template(path)?)),
        };

        let mut tera = Tera::default();
        register_helpers(&mut tera);
        tera.add_raw_template(&name, &content)?;
        debug!(template = %name, "loaded template");

        Ok(Self {
            tera,
            template_name: name,
        })
    }

    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    pub fn render(&self, days: &[Day]) -> Result<String> {
        let mut context = Context::new();
        context.insert("days", days);
        context.insert("pretty", &true);
        Ok(self.tera.render(&self.template_name, &context)?)
    }
}

fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| PipelineError::TemplateIo {
        path: path.to_path_buf(),
        source,
    })
}

/// `fahrplan.html.tera` is registered as `fahrplan.html` so Tera picks the
/// escaping rules from the output extension.
fn template_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    match file_name.strip_suffix(".tera") {
        Some(stripped) => stripped.to_string(),
        None => file_name,
    }
}

fn register_helpers(tera: &mut Tera) {
    tera.register_filter("format_time", |value: &Value, _: &HashMap<String, Value>| {
        minutes(value, "format_time").map(|m| Value::String(format_time(m)))
    });
    tera.register_filter(
        "format_duration",
        |value: &Value, _: &HashMap<String, Value>| {
            minutes(value, "format_duration").map(|m| Value::String(format_duration(m)))
        },
    );
    tera.register_function("format_time", |args: &HashMap<String, Value>| {
        minutes_arg(args, "format_time").map(|m| Value::String(format_time(m)))
    });
    tera.register_function("format_duration", |args: &HashMap<String, Value>| {
        minutes_arg(args, "format_duration").map(|m| Value::String(format_duration(m)))
    });
}

fn minutes(value: &Value, helper: &str) -> tera::Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| tera::Error::msg(format!("{helper} expects a number of minutes, got {value}")))
}

fn minutes_arg(args: &HashMap<String, Value>, helper: &str) -> tera::Result<f64> {
    let value = args
        .get("minutes")
        .ok_or_else(|| tera::Error::msg(format!("{helper} requires a `minutes` argument")))?;
    minutes(value, helper)
}
