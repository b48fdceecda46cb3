pub mod calculator;
pub mod compiler;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod placeholders;
pub mod server;
pub mod telemetry;
pub mod templates;

pub use calculator::{Operation, calculate};
pub use compiler::{CompileError, DocumentCompiler, PdfLatex};
pub use config::{CalculatorConfig, TemplateServiceConfig};
pub use document::{GenerateRequest, GenerationResult, PdfGenerator};
pub use error::ServiceError;
pub use server::{TemplateState, build_calculator_router, build_template_router};
pub use templates::TemplateStore;
