pub mod devices;
pub mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use ifreport_common::config::{Config, DEFAULT_CONFIG_PATH};

#[derive(Parser)]
#[command(name = "ifreport")]
#[command(about = "Collects interface, MAC and ARP bindings from switches into a spreadsheet.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Inventory file listing the devices to poll
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Number of devices polled at the same time (overrides the inventory)
    #[arg(short, long, global = true)]
    pub workers: Option<usize>,

    /// Less decorative output, repeat for even less
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll every device and write the spreadsheet report
    #[command(alias = "r")]
    Report {
        /// Spreadsheet to write (overrides the inventory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the devices in the inventory without connecting to them
    #[command(alias = "d")]
    Devices,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Loads the inventory and applies command line overrides.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut cfg: Config = Config::load(&self.config)
            .with_context(|| format!("could not load inventory {}", self.config.display()))?;

        if let Some(workers) = self.workers {
            cfg.workers = workers;
        }
        if let Commands::Report { output: Some(output) } = &self.command {
            cfg.output = output.clone();
        }

        cfg.validate()?;
        Ok(cfg)
    }
}
