use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use maud::{html, Markup, DOCTYPE};

use crate::generator::ArtifactPaths;

pub const INDEX_FILE: &str = "index.html";

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Landing page linking every chart by file name.
pub fn render_index(artifacts: &ArtifactPaths) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "SPARC Evolution Analysis" }
            }
            body {
                h1 { "SPARC Evolution Analysis" }
                p {
                    "Milestone timeline, feature maturity and impact scores for the five SPARC releases. "
                    em { "Adoption trends are simulated placeholders, not measured data." }
                }
                ul {
                    @for (caption, path) in artifacts.entries() {
                        li { a href=(file_name(path)) { (caption) } }
                    }
                }
            }
        }
    }
}

/// Write `index.html` next to the charts and return its path.
pub fn write_index<P: AsRef<Path>>(dir: P, artifacts: &ArtifactPaths) -> Result<PathBuf> {
    let path = dir.as_ref().join(INDEX_FILE);
    fs::write(&path, render_index(artifacts).into_string())
        .with_context(|| format!("Failed to write index page: {}", path.display()))?;
    log::info!("Index page written to {}", path.display());
    Ok(path)
}
