use tokio::net::TcpListener;

use template_pdf_service::{
    TemplateServiceConfig, TemplateState, build_template_router, telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("template-service");

    let config = TemplateServiceConfig::from_env()?;
    tracing::info!(
        template_dir = %config.template_dir.display(),
        output_dir = %config.output_dir.display(),
        compiler = %config.latex_program,
        "starting template service"
    );

    let state = TemplateState::from_config(&config);
    let router = build_template_router(state, &config.cors_origins);

    let listener = TcpListener::bind(config.listen_addr).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "REST server ready");

    axum::serve(listener, router).await?;

    Ok(())
}
