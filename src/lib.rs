pub mod cli;
pub mod config;
pub mod llm;
pub mod models;
pub mod server;

use cli::Args;
use log::info;
use server::Server;
use std::error::Error;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Chat LLM Type: {}", args.chat_llm_type);
    if let Some(base_url) = &args.chat_base_url {
        info!("Chat Base URL: {}", base_url);
    }
    if let Some(model) = &args.chat_model {
        info!("Chat Model: {}", model);
    }
    info!("Prompt Path: {}", args.prompt_path);
    info!("TLS Enabled: {}", args.enable_tls);
    info!("-------------------------");

    let system_prompt = config::prompt::load_system_prompt(&args.prompt_path)?;
    let llm_config = llm::LlmConfig::from_args(&args)?;
    let client = llm::chat::new_client(&llm_config)?;
    info!(
        "Upstream chat client ready (model: {}, base: {})",
        client.get_model(),
        client.get_base_url().as_deref().unwrap_or("default")
    );

    let server = Server::new(args.server_addr.clone(), client, system_prompt, args);
    server.run().await?;

    Ok(())
}
