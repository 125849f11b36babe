pub mod add;
pub mod category;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod search;
pub mod show;

use crate::libs::config::Config;
use crate::libs::messages::macros::is_debug_mode;
use crate::libs::messages::Message;
use crate::storage::tasks::TaskStore;
use crate::{msg_error, msg_print};
use anyhow::Result;
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the tasks data file
    #[arg(long, value_name = "FILE")]
    data_file: Option<PathBuf>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();

        // The msg_* macros route through tracing in debug mode, so a
        // subscriber is only needed there
        if is_debug_mode() {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
                .init();
        }

        // Data file resolution: command line flag, then config, then the
        // platform default location
        let config = Config::read()?;
        let mut store = match cli.data_file.or(config.storage.map(|storage| storage.data_file)) {
            Some(path) => TaskStore::open(path)?,
            None => TaskStore::new()?,
        };

        msg_print!(Message::MainMenu, true);
        loop {
            let choice: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptMenuChoice.to_string())
                .interact_text()?;
            match choice.trim() {
                "1" => show::cmd(&store)?,
                "2" => category::cmd(&store)?,
                "3" => search::cmd(&store)?,
                "4" => add::cmd(&mut store)?,
                "5" => edit::cmd(&mut store)?,
                "6" => complete::cmd(&mut store)?,
                "7" => delete::cmd(&mut store)?,
                "8" => msg_print!(Message::MainMenu, true),
                "9" | "q" => break,
                _ => msg_error!(Message::UnknownCommand),
            }
        }
        Ok(())
    }
}
