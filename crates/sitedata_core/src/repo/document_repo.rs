//! YAML document repository.
//!
//! # Responsibility
//! - Provide `load`/`save`/`render` over one backing file.
//! - Report failures with the backing path attached.
//!
//! # Invariants
//! - Parse failures are returned, never masked with a default document.
//! - `render` yields exactly the text `save` writes.
//! - No file handle outlives a single `load` or `save` call.

use crate::model::Document;
use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::PathBuf;

pub type RepoResult<T> = Result<T, RepoError>;

/// Document store error for load/save/render.
#[derive(Debug)]
pub enum RepoError {
    /// Backing file could not be read or written.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Backing file exists but is not a valid document.
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    /// In-memory document could not be serialized.
    Serialize(serde_yaml::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot access `{}`: {source}", path.display()),
            Self::Parse { path, source } => {
                write!(f, "cannot parse `{}`: {source}", path.display())
            }
            Self::Serialize(source) => write!(f, "cannot serialize document: {source}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Serialize(source) => Some(source),
        }
    }
}

/// Store contract for one whole document of type `D`.
pub trait DocumentRepository<D> {
    /// Reads the backing file, or returns the zero-value document when absent.
    fn load(&self) -> RepoResult<D>;
    /// Overwrites the backing file with the full document.
    fn save(&self, document: &D) -> RepoResult<()>;
    /// Serializes the document the same way `save` would, without writing.
    fn render(&self, document: &D) -> RepoResult<String>;
}

/// YAML-file-backed document repository.
pub struct YamlFileRepository<D> {
    path: PathBuf,
    _document: PhantomData<fn() -> D>,
}

impl<D> YamlFileRepository<D> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _document: PhantomData,
        }
    }

    fn io_error(&self, source: std::io::Error) -> RepoError {
        RepoError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl<D> DocumentRepository<D> for YamlFileRepository<D>
where
    D: Document + Default + Serialize + DeserializeOwned,
{
    fn load(&self) -> RepoResult<D> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=document_load module=repo status=missing kind={} path={}",
                    D::KIND,
                    self.path.display()
                );
                return Ok(D::default());
            }
            Err(err) => return Err(self.io_error(err)),
        };

        // An empty file carries no document at all.
        if text.trim().is_empty() {
            info!(
                "event=document_load module=repo status=empty kind={} path={}",
                D::KIND,
                self.path.display()
            );
            return Ok(D::default());
        }

        let document: D = serde_yaml::from_str(&text).map_err(|source| {
            error!(
                "event=document_load module=repo status=error kind={} path={}",
                D::KIND,
                self.path.display()
            );
            RepoError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;

        info!(
            "event=document_load module=repo status=ok kind={} path={} records={}",
            D::KIND,
            self.path.display(),
            document.record_count()
        );
        Ok(document)
    }

    fn save(&self, document: &D) -> RepoResult<()> {
        let text = self.render(document)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }
        std::fs::write(&self.path, text).map_err(|err| self.io_error(err))?;

        info!(
            "event=document_save module=repo status=ok kind={} path={} records={}",
            D::KIND,
            self.path.display(),
            document.record_count()
        );
        Ok(())
    }

    fn render(&self, document: &D) -> RepoResult<String> {
        serde_yaml::to_string(document).map_err(RepoError::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::{DocumentRepository, RepoError, YamlFileRepository};
    use crate::model::news::NewsDocument;

    #[test]
    fn whitespace_only_file_loads_as_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news.yml");
        std::fs::write(&path, "\n  \n").unwrap();

        let repo = YamlFileRepository::<NewsDocument>::new(&path);
        assert_eq!(repo.load().unwrap(), NewsDocument::default());
    }

    #[test]
    fn malformed_file_reports_parse_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news.yml");
        std::fs::write(&path, "items: [unterminated\n").unwrap();

        let repo = YamlFileRepository::<NewsDocument>::new(&path);
        let err = repo.load().unwrap_err();
        assert!(matches!(err, RepoError::Parse { .. }));
        assert!(err.to_string().contains("news.yml"));
    }

    #[test]
    fn save_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_data").join("news.yml");

        let repo = YamlFileRepository::<NewsDocument>::new(&path);
        repo.save(&NewsDocument::default()).unwrap();
        assert!(path.exists());
    }
}
