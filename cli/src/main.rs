mod commands;
mod terminal;

use commands::{CommandLine, Commands, devices, report};
use ifreport_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands: CommandLine = CommandLine::parse_args();

    logging::init_logging();
    print::banner(commands.quiet);

    let cfg: Config = commands.load_config()?;

    let result: anyhow::Result<()> = match commands.command {
        Commands::Devices => devices::devices(&cfg, commands.quiet),
        Commands::Report { .. } => report::report(&cfg, commands.quiet).await,
    };

    print::end_of_program(commands.quiet);
    result
}
