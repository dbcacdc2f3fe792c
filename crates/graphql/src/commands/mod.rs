mod stats;

use crate::Cli;
use crate::CommandResult;
use stats::StatsCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Print field, type and enum statistics for GraphQL schema files.
    Stats(Box<StatsCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Stats(cmd) => cmd.run(cli).await
        }
    }
}
