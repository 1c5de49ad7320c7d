use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::{FullTimeError, Result};
use crate::source::DataSource;

/// Writes each source's records as a pretty-printed JSON array under one directory.
#[derive(Debug, Clone)]
pub struct JsonSink {
    dir: PathBuf,
}

impl JsonSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `records` to `<dir>/<source>.json`, replacing any previous file.
    ///
    /// An empty slice is written as `[]`.
    pub fn write<T: Serialize>(&self, source: DataSource, records: &[T]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|source| FullTimeError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(source.file_name());
        let io_err = |source| FullTimeError::Io {
            path: path.clone(),
            source,
        };
        let mut writer = BufWriter::new(File::create(&path).map_err(io_err)?);
        serde_json::to_writer_pretty(&mut writer, records).map_err(|source| {
            FullTimeError::Json {
                path: path.clone(),
                source,
            }
        })?;
        writer.flush().map_err(io_err)?;

        debug!(path = %path.display(), count = records.len(), "wrote {source}");
        Ok(path)
    }
}
