//! Share target that saves the page into a directory.

use std::path::{Path, PathBuf};

use super::{ShareError, ShareReceipt, ShareRequest, ShareSupport, ShareTarget};

/// Writes shared files into `dir`, never overwriting existing ones.
pub struct DirectoryTarget {
    dir: PathBuf,
    label: String,
}

impl DirectoryTarget {
    pub fn new(dir: PathBuf) -> Self {
        let label = format!("Save to {}", dir.display());
        Self { dir, label }
    }
}

impl ShareTarget for DirectoryTarget {
    fn label(&self) -> &str {
        &self.label
    }

    fn support(&self) -> ShareSupport {
        if self.dir.exists() && !self.dir.is_dir() {
            ShareSupport::Unavailable
        } else {
            ShareSupport::Files
        }
    }

    fn share(&self, request: &ShareRequest) -> Result<ShareReceipt, ShareError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            ShareError::Failed(format!("Failed to create {}: {}", self.dir.display(), e))
        })?;

        let mut saved = Vec::with_capacity(request.files.len());
        for file in &request.files {
            let Some(name) = sanitize_file_name(&file.name) else {
                return Err(ShareError::Failed(format!("Unsafe file name: {:?}", file.name)));
            };
            let name = unique_file_name(&self.dir, name);
            let path = self.dir.join(&name);
            std::fs::write(&path, &file.bytes).map_err(|e| {
                ShareError::Failed(format!("Failed to write {}: {}", path.display(), e))
            })?;
            tracing::info!(path = %path.display(), bytes = file.size(), "saved coloring page");
            saved.push(path);
        }

        let summary = match saved.as_slice() {
            [single] => format!("Saved to {}", single.display()),
            many => format!("Saved {} files to {}", many.len(), self.dir.display()),
        };
        Ok(ShareReceipt { summary })
    }
}

/// `name` trimmed, or `None` if it is empty or could leave the directory.
fn sanitize_file_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed.contains(['/', '\\'])
        || trimmed.contains("..")
        || trimmed.contains('\0')
    {
        return None;
    }
    Some(trimmed)
}

/// `original` if it is free in `dir`, otherwise `stem-N.ext` with the first free N.
fn unique_file_name(dir: &Path, original: &str) -> String {
    if !dir.join(original).exists() {
        return original.to_string();
    }

    let original_path = Path::new(original);
    let stem = original_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("coloring_page");
    let extension = original_path.extension().and_then(|ext| ext.to_str());

    let mut counter = 1;
    loop {
        let candidate = match extension {
            Some(ext) => format!("{stem}-{counter}.{ext}"),
            None => format!("{stem}-{counter}"),
        };
        if !dir.join(&candidate).exists() {
            return candidate;
        }
        counter += 1;
    }
}
