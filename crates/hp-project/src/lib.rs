//! hp-project: profile document format, validation and loading.

pub mod convert;
pub mod schema;
pub mod validate;

pub use convert::to_elements;
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_document};

use hp_profile::{DiagramModel, ProfileConfig, ProfileError, compute};
use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("Unsupported file extension: {path}")]
    UnknownFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn parse_yaml_str(content: &str) -> ProjectResult<ProfileDocument> {
    let doc: ProfileDocument = serde_yaml::from_str(content)?;
    validate_document(&doc)?;
    Ok(doc)
}

pub fn parse_json_str(content: &str) -> ProjectResult<ProfileDocument> {
    let doc: ProfileDocument = serde_json::from_str(content)?;
    validate_document(&doc)?;
    Ok(doc)
}

pub fn load_yaml(path: &Path) -> ProjectResult<ProfileDocument> {
    let content = std::fs::read_to_string(path)?;
    let doc = parse_yaml_str(&content)?;
    tracing::debug!(path = %path.display(), elements = doc.elements.len(), "loaded profile");
    Ok(doc)
}

pub fn load_json(path: &Path) -> ProjectResult<ProfileDocument> {
    let content = std::fs::read_to_string(path)?;
    let doc = parse_json_str(&content)?;
    tracing::debug!(path = %path.display(), elements = doc.elements.len(), "loaded profile");
    Ok(doc)
}

/// Load by extension: `.json` is JSON, `.yaml`/`.yml` is YAML.
pub fn load(path: &Path) -> ProjectResult<ProfileDocument> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        Some("yaml" | "yml") => load_yaml(path),
        _ => Err(ProjectError::UnknownFormat {
            path: path.display().to_string(),
        }),
    }
}

pub fn save_yaml(path: &Path, doc: &ProfileDocument) -> ProjectResult<()> {
    validate_document(doc)?;
    let content = serde_yaml::to_string(doc)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn save_json(path: &Path, doc: &ProfileDocument) -> ProjectResult<()> {
    validate_document(doc)?;
    let content = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Compute the diagram for a document using its own config.
pub fn render(doc: &ProfileDocument) -> ProjectResult<DiagramModel> {
    render_with(doc, &doc.config)
}

/// Compute the diagram for a document with an overriding config.
pub fn render_with(doc: &ProfileDocument, config: &ProfileConfig) -> ProjectResult<DiagramModel> {
    let elements = to_elements(doc)?;
    Ok(compute(&elements, config)?)
}
