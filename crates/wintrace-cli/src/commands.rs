use anyhow::Result;

use super::args::{Cli, Commands};
use super::handlers;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert {
            input,
            output,
            dump_all,
            explore,
            settings,
            verbose,
        } => handlers::convert::handle(&input, &output, dump_all, explore, settings, verbose),

        Commands::Providers => handlers::providers::handle(),
    }
}
