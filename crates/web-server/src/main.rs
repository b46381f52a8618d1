use std::path::Path;

// This main function is the entry point when running `cargo run -p web-server`.
// It reads `config.toml` from the working directory and serves on the configured address.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = configuration::load_settings(Path::new("config.toml"))?;
    let _guard = configuration::init_tracing(&settings.logging)?;
    let addr = settings.server.socket_addr()?;
    web_server::run_server(addr, settings).await
}
