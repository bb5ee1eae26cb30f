use demo_kit::{telemetry, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load();
    telemetry::init(config.log_format);

    demo_service::run_server(config).await?;
    Ok(())
}
