//! File encryption operations
//!
//! High-level pipeline from a Lua source file to its `.wgg` artifact:
//! read, pad+encrypt, write atomically under the derived output name.
//! Each file's pipeline is independent, so batches run in parallel.

use crate::cipher;
use crate::error::{ErrorCategory, ErrorKind, Result, WggcryptError};
use crate::naming;
use rayon::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A written `.wgg` artifact: where it landed and how large it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedArtifact {
    /// Path the artifact was written to.
    pub path: PathBuf,
    /// Ciphertext length in bytes (equals the file size on disk).
    pub len: u64,
}

/// Derive the output path for `input`.
///
/// The file name goes through [`naming::wgg_file_name`]; the artifact lands
/// next to the input, or in `out_dir` when one is given. The input must have
/// a UTF-8 file name for the extension rewrite to be meaningful.
pub fn output_path_for(input: &Path, out_dir: Option<&Path>) -> Result<PathBuf> {
    let file_name = input.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
        WggcryptError::with_kind(
            ErrorCategory::User,
            ErrorKind::InvalidFileName,
            format!("cannot derive an output name from {}", input.display()),
        )
    })?;
    let wgg_name = naming::wgg_file_name(file_name);

    Ok(match out_dir {
        Some(dir) => dir.join(wgg_name),
        None => input.with_file_name(wgg_name),
    })
}

/// Encrypt a single file.
///
/// Reads plaintext from `input_path`, runs the fixed-key transform, and
/// writes the ciphertext to `output_path`. The write is atomic (tempfile +
/// fsync + rename), so `output_path` never holds a partial artifact.
pub fn encrypt_file(input_path: &Path, output_path: &Path) -> Result<EncryptedArtifact> {
    let plaintext = fs::read(input_path).map_err(|e| read_error(input_path, e))?;
    let ciphertext =
        cipher::encrypt(&plaintext).map_err(|e| e.with_context("encryption failed"))?;
    write_file_atomic(output_path, &ciphertext)
        .map_err(|e| e.with_context(format!("failed to write to {}", output_path.display())))?;

    Ok(EncryptedArtifact {
        path: output_path.to_path_buf(),
        len: ciphertext.len() as u64,
    })
}

/// Encrypt a batch of files, in parallel.
///
/// Output paths are derived per input via [`output_path_for`]. The returned
/// artifacts are in input order regardless of completion order; the first
/// error aborts the batch.
pub fn encrypt_batch(
    inputs: &[PathBuf],
    out_dir: Option<&Path>,
) -> Result<Vec<EncryptedArtifact>> {
    inputs
        .par_iter()
        .map(|input| {
            let output = output_path_for(input, out_dir)?;
            encrypt_file(input, &output)
        })
        .collect()
}

/// Write file atomically (tempfile + flush + fsync + rename)
///
/// Either the old file or the new file exists, never a partial one.
fn write_file_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp_file = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
        WggcryptError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            "failed to create tempfile",
            e,
        )
    })?;

    temp_file.write_all(contents).map_err(|e| {
        WggcryptError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            "failed to write to tempfile",
            e,
        )
    })?;
    // Flush and fsync() such that the rename later, if it succeeds, will
    // always point to a valid file.
    temp_file.flush().map_err(|e| {
        WggcryptError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            "failed to flush tempfile",
            e,
        )
    })?;
    temp_file.as_file().sync_all().map_err(|e| {
        WggcryptError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            "failed to sync file prior to rename",
            e,
        )
    })?;

    temp_file.persist(path).map_err(|e| {
        WggcryptError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            format!("failed to rename to target file {}", path.display()),
            e,
        )
    })?;
    Ok(())
}

fn read_error(path: &Path, err: io::Error) -> WggcryptError {
    let category = if err.kind() == io::ErrorKind::NotFound {
        ErrorCategory::User
    } else {
        ErrorCategory::Internal
    };
    WggcryptError::with_kind_and_source(
        category,
        ErrorKind::Io,
        format!("failed to read from {}", path.display()),
        err,
    )
}
