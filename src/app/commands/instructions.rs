use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::adapters::embedded_assets::{self, INSTRUCTIONS_TEMPLATE};
use crate::domain::{AppError, ArtifactRole, DatasetRegistry};

#[derive(Debug, Serialize)]
struct DatasetGuide<'a> {
    heading: &'a str,
    notebook: Option<&'a str>,
    guidance: &'a [String],
}

/// Render the workflow instructions block for the registry's datasets.
pub fn render_instructions(registry: &DatasetRegistry) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_template(INSTRUCTIONS_TEMPLATE, embedded_assets::instructions_template_source()?)?;

    let datasets: Vec<DatasetGuide<'_>> = registry
        .datasets
        .iter()
        .map(|dataset| DatasetGuide {
            heading: &dataset.heading,
            notebook: dataset.path_for(ArtifactRole::Notebook),
            guidance: &dataset.guidance,
        })
        .collect();

    let rendered =
        env.get_template(INSTRUCTIONS_TEMPLATE)?.render(context! { datasets => datasets })?;
    Ok(rendered)
}
