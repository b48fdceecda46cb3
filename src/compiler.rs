//! External typesetting tool invoked to turn a `.tex` file into a PDF.

use std::{
    path::{Path, PathBuf},
    process::Stdio,
};

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("compiler exited with status {status:?}: {diagnostics}")]
    Failed {
        status: Option<i32>,
        diagnostics: String,
    },
    #[error("failed to run compiler: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Compiles `source` and leaves the artifact in `output_dir`.
///
/// Implementations only report whether the tool ran cleanly; callers check
/// for the artifact themselves.
#[async_trait]
pub trait DocumentCompiler: Send + Sync {
    async fn compile(&self, source: &Path, output_dir: &Path) -> Result<(), CompileError>;
}

/// Runs `pdflatex` (or a compatible program) as a child process.
#[derive(Debug, Clone)]
pub struct PdfLatex {
    program: PathBuf,
}

impl PdfLatex {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl DocumentCompiler for PdfLatex {
    async fn compile(&self, source: &Path, output_dir: &Path) -> Result<(), CompileError> {
        info!(program = %self.program.display(), source = %source.display(), "running compiler");

        // stdin is closed so a broken document cannot leave the tool waiting on a prompt
        let output = Command::new(&self.program)
            .arg("-interaction=nonstopmode")
            .arg("-output-directory")
            .arg(output_dir)
            .arg(source)
            .stdin(Stdio::null())
            .output()
            .await?;

        if output.status.success() {
            debug!(status = ?output.status, "compiler finished");
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let diagnostics = if stderr.trim().is_empty() {
            String::from_utf8_lossy(&output.stdout).into_owned()
        } else {
            stderr.into_owned()
        };

        Err(CompileError::Failed {
            status: output.status.code(),
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("doc.tex");
        std::fs::write(&source, "\\relax").unwrap();

        let compiler = PdfLatex::new("no-such-latex-binary-for-tests");
        let err = compiler.compile(&source, tmp.path()).await.unwrap_err();
        assert!(matches!(err, CompileError::Spawn(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_a_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("doc.tex");
        std::fs::write(&source, "\\relax").unwrap();

        let err = PdfLatex::new("false")
            .compile(&source, tmp.path())
            .await
            .unwrap_err();
        assert!(matches!(err, CompileError::Failed { status: Some(1), .. }));
    }
}
