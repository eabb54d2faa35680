//! folio - command-line front end for the portfolio behavior layer
//!
//! This is the main entry point for the folio tool.

use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};
use portfolio::page::{self, Theme};
use portfolio::{ContactInput, ContactPipeline, DeliveryConfig, FormState, SubmitOutcome};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

mod cli;
mod console;

use cli::{Cli, Command, ThemeAction};
use console::ConsoleNotifier;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    // Bootstrap config directory
    if let Err(e) = config::init() {
        error!("Failed to initialize config directory: {}", e);
    }

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Send {
            name,
            email,
            message,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            send(config, ContactInput::new(name, email, message))
        }
        Command::Channels { config, json } => {
            let config = load_config(config.as_deref())?;
            print_channels(&config, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Theme { action } => {
            theme(action)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DeliveryConfig> {
    match path {
        Some(path) => DeliveryConfig::from_file(path),
        None => {
            let config = DeliveryConfig::load()?;
            if config.channels().len() == 1
                && let Some(path) = DeliveryConfig::default_config_path()
            {
                warn!(
                    "No delivery channel configured; messages will open your mail client.\n\
                     To configure delivery, either:\n\
                     1. Place a contact config at: {}\n\
                     2. Or set PORTFOLIO_EMAILJS_* / PORTFOLIO_FORM_ENDPOINT environment variables",
                    path.display()
                );
            }
            Ok(config)
        }
    }
}

fn send(config: DeliveryConfig, input: ContactInput) -> Result<ExitCode> {
    let pipeline = ContactPipeline::new(config, Arc::new(ConsoleNotifier));
    let form = FormState::new();
    form.fill(input);

    let outcome = pipeline.submit(&form, &form.input());
    info!("Contact submission finished: {:?}", outcome);

    Ok(match outcome {
        SubmitOutcome::Delivered(_) | SubmitOutcome::MailClientOpened { .. } => ExitCode::SUCCESS,
        SubmitOutcome::Invalid(_) | SubmitOutcome::MailClientFailed | SubmitOutcome::Busy => {
            ExitCode::FAILURE
        }
    })
}

fn print_channels(config: &DeliveryConfig, json: bool) -> Result<()> {
    let channels = config.channels();
    if json {
        let kinds: Vec<_> = channels.iter().map(|c| c.kind()).collect();
        println!("{}", serde_json::to_string_pretty(&kinds)?);
        return Ok(());
    }

    for (i, channel) in channels.iter().enumerate() {
        let detail = match channel {
            portfolio::DeliveryChannel::Relay(target) => {
                format!("service {} / template {}", target.service_id, target.template_id)
            }
            portfolio::DeliveryChannel::FormEndpoint(url) => url.to_string(),
            portfolio::DeliveryChannel::MailClient { address } => format!("mailto:{}", address),
        };
        println!("{}. {:<14} {}", i + 1, channel.kind().as_str(), detail);
    }
    Ok(())
}

fn theme(action: ThemeAction) -> Result<()> {
    let current = page::load_theme();
    let theme: Theme = match action {
        ThemeAction::Show => current,
        ThemeAction::Toggle => {
            let next = current.toggled();
            page::save_theme(next)?;
            info!("Theme switched to {}", next.as_str());
            next
        }
    };
    println!("{}", theme.as_str());
    Ok(())
}
