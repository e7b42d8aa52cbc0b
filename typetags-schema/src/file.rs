//! Schema file loading for front-end collaborators.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::ast::Schema;

/// Failure to load a schema file from disk.
#[derive(Debug, Error)]
pub enum SchemaFileError {
    #[error("failed to read schema file `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A schema file loaded from disk.
///
/// Core parsing never touches the filesystem; this is the collaborator the
/// CLI uses to get text into [`Schema::parse`].
#[derive(Debug, Clone)]
pub struct SchemaFile {
    path: PathBuf,
    contents: String,
}

impl SchemaFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SchemaFileError> {
        let path = path.as_ref().to_path_buf();
        let contents =
            std::fs::read_to_string(&path).map_err(|source| SchemaFileError::Read {
                path: path.clone(),
                source,
            })?;
        Ok(Self { path, contents })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Parse the loaded text. Never fails; see [`Schema::parse`].
    pub fn parse(&self) -> Schema {
        Schema::parse(&self.contents)
    }
}
