mod generator;
mod types;

pub use generator::{PdfGenerator, normalize_output_filename};
pub use types::{GenerateRequest, GenerationResult};
