use tokio::net::TcpListener;

use template_pdf_service::{CalculatorConfig, build_calculator_router, telemetry::init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("calculator-service");

    let config = CalculatorConfig::from_env()?;
    let router = build_calculator_router(&config.cors_origins);

    let listener = TcpListener::bind(config.listen_addr).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "calculator server ready");

    axum::serve(listener, router).await?;

    Ok(())
}
