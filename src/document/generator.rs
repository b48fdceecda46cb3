use std::{path::PathBuf, sync::Arc};

use tokio::fs;
use tracing::{info, instrument};

use crate::{
    compiler::DocumentCompiler,
    document::{GenerateRequest, GenerationResult},
    error::ServiceError,
    placeholders,
    templates::{TemplateStore, is_plain_file_name},
};

const PDF_SUFFIX: &str = ".pdf";

/// Fills a template and hands the result to the external compiler.
pub struct PdfGenerator {
    templates: TemplateStore,
    output_dir: PathBuf,
    compiler: Arc<dyn DocumentCompiler>,
}

impl PdfGenerator {
    pub fn new(
        templates: TemplateStore,
        output_dir: impl Into<PathBuf>,
        compiler: Arc<dyn DocumentCompiler>,
    ) -> Self {
        Self {
            templates,
            output_dir: output_dir.into(),
            compiler,
        }
    }

    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    #[instrument(skip_all, fields(template = %request.template_name))]
    pub async fn generate(&self, request: GenerateRequest) -> Result<GenerationResult, ServiceError> {
        let template_path = self.templates.resolve(&request.template_name)?;
        let output_filename = normalize_output_filename(&request.output_filename)?;

        let source = fs::read_to_string(&template_path)
            .await
            .map_err(generic_failure)?;
        let filled = placeholders::substitute(&source, &request.placeholder_values);

        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(generic_failure)?;

        let stem = output_filename
            .strip_suffix(PDF_SUFFIX)
            .unwrap_or(&output_filename);
        let tex_path = self.output_dir.join(format!("{stem}.tex"));
        fs::write(&tex_path, filled).await.map_err(generic_failure)?;

        self.compiler.compile(&tex_path, &self.output_dir).await?;

        let pdf_path = self.output_dir.join(&output_filename);
        if !fs::try_exists(&pdf_path).await.unwrap_or(false) {
            return Err(ServiceError::Internal("Failed to generate PDF".into()));
        }

        info!(path = %pdf_path.display(), "PDF generated");
        Ok(GenerationResult {
            message: "PDF generated successfully".to_string(),
            path: pdf_path.display().to_string(),
        })
    }
}

/// Appends `.pdf` unless the name already ends with it.
pub fn normalize_output_filename(name: &str) -> Result<String, ServiceError> {
    let invalid = || ServiceError::BadRequest("Invalid output filename".into());

    if !is_plain_file_name(name) {
        return Err(invalid());
    }
    let normalized = if name.ends_with(PDF_SUFFIX) {
        name.to_string()
    } else {
        format!("{name}{PDF_SUFFIX}")
    };
    if normalized.len() == PDF_SUFFIX.len() {
        return Err(invalid());
    }
    Ok(normalized)
}

fn generic_failure(err: std::io::Error) -> ServiceError {
    ServiceError::Internal(format!("Error generating PDF: {err}"))
}
