// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::api::start_server;
use crate::config::RelayConfig;
use crate::enhance::{self, EnhancementOption};
use crate::relay::{FalClient, ImageGenerator, RelayClient};
use crate::session::{GenerationResult, PromptSession};

/// Image prompt relay
#[derive(Parser, Debug)]
#[command(name = "image-prompt-relay")]
#[command(version)]
#[command(about = "Relay text prompts to a hosted image generator, with prompt enhancement", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP relay server
    Serve(ServeArgs),

    /// Print an enhanced version of a prompt
    Enhance(PromptArgs),

    /// Print every labelled variation of a prompt
    Options(PromptArgs),

    /// Generate an image and print its URL
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides RELAY_LISTEN_ADDR)
    #[arg(long, env = "RELAY_LISTEN_ADDR")]
    pub listen: Option<String>,
}

#[derive(Args, Debug)]
pub struct PromptArgs {
    /// Prompt text
    pub prompt: String,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Prompt text
    pub prompt: String,

    /// Enhance the prompt before generating
    #[arg(long)]
    pub enhance: bool,

    /// Apply a style recommendation by label, e.g. "Photorealistic"
    #[arg(long)]
    pub style: Option<String>,

    /// Go through a running relay instead of calling the provider directly
    #[arg(long, env = "RELAY_URL")]
    pub relay_url: Option<String>,
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve(args) => serve(args).await,
        Commands::Enhance(args) => {
            let enhanced = enhance::enhance_if_present(&args.prompt)
                .ok_or_else(|| anyhow!("prompt must not be empty"))?;
            println!("{}", enhanced);
            Ok(())
        }
        Commands::Options(args) => print_options(&args.prompt),
        Commands::Generate(args) => generate(args).await,
    }
}

async fn serve(args: ServeArgs) -> Result<()> {
    let mut config = RelayConfig::from_env();
    if let Some(listen) = args.listen {
        config.listen_addr = listen;
    }
    config.validate_for_server()?;
    info!("Starting relay: {:?}", config);
    start_server(config).await
}

fn print_options(prompt: &str) -> Result<()> {
    let base = prompt.trim();
    if base.is_empty() {
        return Err(anyhow!("prompt must not be empty"));
    }

    let print_group = |title: &str, options: &[EnhancementOption]| {
        println!("{}:", title);
        for option in options {
            println!("  {:<24} {}", option.label, option.apply(base));
        }
    };

    print_group("Variations", enhance::static_enhancements());
    print_group("Suggested", enhance::dynamic_enhancements(base).as_slice());
    print_group("Styles", enhance::recommendations());
    Ok(())
}

fn find_recommendation(label: &str) -> Result<EnhancementOption> {
    enhance::recommendations()
        .iter()
        .find(|o| o.label.eq_ignore_ascii_case(label.trim()))
        .copied()
        .ok_or_else(|| {
            let known: Vec<_> = enhance::recommendations().iter().map(|o| o.label).collect();
            anyhow!("unknown style '{}'; expected one of: {}", label, known.join(", "))
        })
}

async fn generate(args: GenerateArgs) -> Result<()> {
    match args.relay_url.as_deref() {
        Some(url) => run_session(RelayClient::new(url)?, &args).await,
        None => {
            let config = RelayConfig::from_env();
            run_session(FalClient::from_config(&config)?, &args).await
        }
    }
}

async fn run_session<G: ImageGenerator>(generator: G, args: &GenerateArgs) -> Result<()> {
    let mut session = PromptSession::new(generator);
    session.set_prompt(args.prompt.as_str());
    let mut rewritten = args.enhance && session.enhance();
    if let Some(label) = args.style.as_deref() {
        let style = find_recommendation(label)?;
        rewritten |= session.apply_recommendation(&style);
    }
    if rewritten {
        println!("Prompt: {}", session.prompt());
    }

    match session.generate().await {
        Some(GenerationResult::Image(url)) => {
            println!("{}", url);
            Ok(())
        }
        Some(GenerationResult::Error(message)) => Err(anyhow!(message)),
        None => Err(anyhow!("prompt must not be empty")),
    }
}
