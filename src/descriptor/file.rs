use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::descriptor::BuildDescriptor;
use crate::error::PatchError;

/// The descriptor at its canonical location on disk.
pub struct DescriptorFile {
    path: PathBuf,
}

impl DescriptorFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DescriptorFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<BuildDescriptor, PatchError> {
        let text = fs::read_to_string(&self.path).map_err(|source| PatchError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(BuildDescriptor::parse(&text))
    }

    /// Replace the descriptor with `descriptor`.
    ///
    /// The content goes to a temporary file next to the destination, which is
    /// synced and then renamed over it. On failure the temporary file is
    /// removed and the destination keeps its previous content.
    pub fn write(&self, descriptor: &BuildDescriptor) -> Result<(), PatchError> {
        self.write_atomic(descriptor).map_err(|source| PatchError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn write_atomic(&self, descriptor: &BuildDescriptor) -> io::Result<()> {
        // Rename over the file a symlink points to, not over the link
        let (target, existing) = match fs::canonicalize(&self.path) {
            Ok(resolved) => {
                let meta = fs::metadata(&resolved)?;
                (resolved, Some(meta))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => (self.path.clone(), None),
            Err(e) => return Err(e),
        };

        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(descriptor.to_text().as_bytes())?;
        tmp.flush()?;

        // NamedTempFile is created 0600; keep the mode of the file we replace
        if let Some(meta) = existing {
            tmp.as_file().set_permissions(meta.permissions())?;
        }

        tmp.as_file().sync_all()?;
        tmp.persist(&target).map_err(|e| e.error)?;

        #[cfg(unix)]
        fs::File::open(dir)?.sync_all()?;

        Ok(())
    }
}
