use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use anyhow::anyhow;

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct TemplateServiceConfig {
    pub listen_addr: SocketAddr,
    pub template_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template_extension: String,
    pub latex_program: String,
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    pub listen_addr: SocketAddr,
    pub cors_origins: Vec<String>,
}

impl TemplateServiceConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = parse_addr(lookup("TEMPLATE_SERVICE_ADDR"), 8000);

        let template_dir = PathBuf::from(required(&lookup, "TEMPLATE_DIR")?);
        let output_dir = PathBuf::from(required(&lookup, "OUTPUT_DIR")?);

        let template_extension = lookup("TEMPLATE_EXTENSION")
            .map(|ext| ext.trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .unwrap_or_else(|| "txt".to_string());
        let latex_program = lookup("LATEX_COMPILER")
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| "pdflatex".to_string());

        Ok(Self {
            listen_addr,
            template_dir,
            output_dir,
            template_extension,
            latex_program,
            cors_origins: parse_origins(lookup("CORS_ALLOWED_ORIGINS")),
        })
    }
}

impl CalculatorConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            listen_addr: parse_addr(lookup("CALCULATOR_ADDR"), 8001),
            cors_origins: parse_origins(lookup("CORS_ALLOWED_ORIGINS")),
        })
    }
}

fn required<F>(lookup: &F, key: &str) -> anyhow::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| anyhow!("environment variable {key} must be set"))
}

fn parse_addr(raw: Option<String>, default_port: u16) -> SocketAddr {
    raw.and_then(|v| v.parse().ok())
        .unwrap_or_else(|| SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), default_port))
}

fn parse_origins(raw: Option<String>) -> Vec<String> {
    let origins: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if origins.is_empty() {
        vec![DEFAULT_CORS_ORIGIN.to_string()]
    } else {
        origins
    }
}
