// File: src/persistence.rs
use crate::config::FilterConfig;
use crate::core::engine::FilterEngine;
use crate::core::index::BadFormIndex;
use crate::error::{FilterError, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Bumped whenever the form-set pipeline changes what an index holds.
pub const SNAPSHOT_VERSION: u32 = 1;

/// A compiled bad-form index together with the config it was built from.
/// The config is kept so a stale snapshot can be told apart on load.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub config: FilterConfig,
    pub bad_forms: BadFormIndex,
}

/// Writes the snapshot atomically: a temp file in the target directory is
/// persisted over `path` only once fully written.
pub fn save_snapshot(engine: &FilterEngine, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let snapshot = engine.snapshot();
    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, &snapshot)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(std::io::Error::from)?;
    debug!(path = %path.display(), forms = snapshot.bad_forms.len(), "snapshot saved");
    Ok(())
}

/// Decoding from the in-memory bytes bounds every length prefix by the
/// file size, so a corrupt file is an error rather than a huge allocation.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let bytes = fs::read(path)?;
    let snapshot: Snapshot = bincode::deserialize(&bytes)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(FilterError::SnapshotVersion {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    Ok(snapshot)
}
