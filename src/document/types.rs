use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub template_name: String,
    #[serde(default)]
    pub placeholder_values: BTreeMap<String, String>,
    pub output_filename: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub message: String,
    pub path: String,
}
