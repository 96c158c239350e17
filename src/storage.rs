// src/storage.rs
// =============================================================================
// The output directory the PDFs end up in.
//
// Rules:
// - The file name comes from the last path segment of the PDF's URL
// - ".pdf" is appended when the name doesn't already end with it
// - Existing files are never overwritten: report.pdf, report_1.pdf,
//   report_2.pdf, ...
// - A file only appears under its final name once it is complete, so a
//   downstream job listing *.pdf never sees half a download
// =============================================================================

use std::path::{Path, PathBuf};
use url::Url;

use crate::error::{SetupError, WriteError};

#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Creates the directory (and its parents) if needed.
    pub async fn create(root: impl Into<PathBuf>) -> Result<Self, SetupError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|source| SetupError::OutputDir {
                path: root.clone(),
                source,
            })?;
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes `body` under a free name derived from `url` and returns the
    /// path it was saved to.
    pub async fn save(&self, url: &Url, body: &[u8]) -> Result<PathBuf, WriteError> {
        let filename = pdf_filename(url);
        let target = self.free_path(&filename).await;

        // Write next to the target, then rename into place
        let mut partial = target.clone().into_os_string();
        partial.push(".part");
        let partial = PathBuf::from(partial);
        tokio::fs::write(&partial, body)
            .await
            .map_err(|source| WriteError {
                path: partial.clone(),
                source,
            })?;
        move_into_place(&partial, &target).await?;

        Ok(target)
    }

    /// First path in the directory that doesn't exist yet for `filename`.
    async fn free_path(&self, filename: &str) -> PathBuf {
        let candidate = self.root.join(filename);
        if !exists(&candidate).await {
            return candidate;
        }

        let (stem, extension) = split_extension(filename);
        let mut counter: u64 = 1;
        loop {
            let candidate = self.root.join(format!("{}_{}{}", stem, counter, extension));
            if !exists(&candidate).await {
                return candidate;
            }
            counter += 1;
        }
    }
}

// Renames the finished .part file to its final name. On failure the .part
// file is removed so nothing half-named stays in the directory.
async fn move_into_place(partial: &Path, target: &Path) -> Result<(), WriteError> {
    if let Err(source) = tokio::fs::rename(partial, target).await {
        tokio::fs::remove_file(partial).await.ok();
        return Err(WriteError {
            path: target.to_path_buf(),
            source,
        });
    }
    Ok(())
}

async fn exists(path: &Path) -> bool {
    // An unreadable entry counts as taken, we never want to clobber it
    tokio::fs::try_exists(path).await.unwrap_or(true)
}

/// File name for a PDF URL: the path basename, with ".pdf" appended
/// unless it already ends with it. An empty basename gives ".pdf".
pub fn pdf_filename(url: &Url) -> String {
    let basename = url
        .path_segments()
        .and_then(|segments| segments.last())
        .unwrap_or("");

    // Case-sensitive: "FORM.PDF" becomes "FORM.PDF.pdf" so *.pdf finds it
    if basename.ends_with(".pdf") {
        basename.to_string()
    } else {
        format!("{}.pdf", basename)
    }
}

// "report.pdf" -> ("report", ".pdf"); ".pdf" -> ("", ".pdf")
fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(index) => filename.split_at(index),
        None => (filename, ""),
    }
}
