use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Widget {
    name: String,
}

/// Reads the project name from the descriptor's `<name>` element.
pub fn project_name(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let widget: Widget = quick_xml::de::from_str(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    anyhow::ensure!(
        !widget.name.is_empty(),
        "{} has an empty name element",
        path.display()
    );
    Ok(widget.name)
}
