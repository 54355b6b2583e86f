//! External build tooling
//!
//! Drives `latexmk` and the print spooler as opaque subprocesses. Calls
//! block until the external process exits; there is no retry or timeout
//! handling, the caller decides what a failure means.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info, warn};

use crate::error::{TexError, TexResult};

/// Intermediate files removed by the manual cleanup fallback.
pub const AUX_EXTENSIONS: [&str; 5] = ["aux", "log", "out", "fls", "fdb_latexmk"];

/// Check if `latexmk` is available in the system PATH
///
/// # Errors
///
/// Returns [`TexError::LatexmkNotFound`] if `latexmk` is not installed or
/// not in PATH
pub fn check_latexmk_available() -> TexResult<String> {
    let output = Command::new("latexmk")
        .arg("-version")
        .output()
        .map_err(|_| TexError::LatexmkNotFound)?;

    if !output.status.success() {
        return Err(TexError::LatexmkNotFound);
    }

    let version_output = String::from_utf8_lossy(&output.stdout);

    // First non-blank line: "Latexmk, John Collins, ... Version 4.x"
    let version = version_output
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("unknown")
        .to_string();

    Ok(version)
}

/// Compile a `.tex` file with `latexmk -xelatex -f`.
///
/// Captures stdout and stderr and returns them combined. A non-zero exit
/// becomes [`TexError::BuildFailed`] carrying that captured output; a zero
/// exit logs it at `info` and hands it back to the caller.
///
/// # Errors
///
/// Returns [`TexError::LatexmkNotFound`] when the tool cannot be spawned,
/// [`TexError::BuildFailed`] when it exits non-zero.
pub fn compile_tex(tex_path: &Path) -> TexResult<String> {
    debug!(path = %tex_path.display(), "invoking latexmk");

    let output = Command::new("latexmk")
        .args(["-xelatex", "-f"])
        .arg(tex_path)
        .output()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => TexError::LatexmkNotFound,
            _ => TexError::Io(e),
        })?;

    let mut captured = String::from_utf8_lossy(&output.stdout).into_owned();
    captured.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        return Err(TexError::BuildFailed { output: captured });
    }

    info!("latexmk finished:\n{captured}");
    Ok(captured)
}

/// Remove intermediate build files for `base`, best effort.
///
/// Tries `latexmk -c` first; on any failure (tool missing, non-zero exit)
/// falls back to deleting the known intermediate extensions directly.
/// Missing files count as already clean, so this never fails.
pub fn clean_aux(base: &Path) {
    match Command::new("latexmk").arg("-c").arg(base).output() {
        Ok(output) if output.status.success() => {}
        _ => {
            warn!(path = %base.display(), "latexmk -c failed, removing intermediate files directly");
            remove_aux_files(base);
        }
    }
}

/// Delete `<base>.<ext>` for each known intermediate extension.
fn remove_aux_files(base: &Path) {
    for ext in AUX_EXTENSIONS {
        let file = base.with_extension(ext);
        if file.exists() {
            let _ = std::fs::remove_file(&file);
        }
    }
}

/// Hand a PDF to the `lpr` print spooler.
///
/// # Errors
///
/// Returns [`TexError::PrintFailed`] when `lpr` exits non-zero; spawn
/// failures surface as [`TexError::Io`]
pub fn print_pdf(pdf_path: &Path) -> TexResult<()> {
    let status = Command::new("lpr").arg(pdf_path).status()?;

    if !status.success() {
        return Err(TexError::PrintFailed(format!(
            "lpr exited with {status} for {}",
            pdf_path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_aux_files_skips_missing() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("report");

        std::fs::write(base.with_extension("aux"), "").unwrap();
        std::fs::write(base.with_extension("log"), "").unwrap();
        std::fs::write(base.with_extension("tex"), "").unwrap();

        // out/fls/fdb_latexmk are missing; that must not be an error
        remove_aux_files(&base);

        assert!(!base.with_extension("aux").exists());
        assert!(!base.with_extension("log").exists());
        assert!(base.with_extension("tex").exists());
    }

    #[test]
    fn test_aux_extensions_are_the_latexmk_set() {
        assert_eq!(AUX_EXTENSIONS, ["aux", "log", "out", "fls", "fdb_latexmk"]);
    }
}
