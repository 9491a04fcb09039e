use crate::demo::{
    run_demo, run_number_generate, run_number_parse, DemoArgs, NumberGenerateArgs, NumberParseArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use docmint::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Docmint",
    about = "Run the document workflow service or exercise it from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Generate or parse HIYES document numbers
    Number {
        #[command(subcommand)]
        command: NumberCommand,
    },
    /// Run a console demo covering template analysis and document numbering
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum NumberCommand {
    /// Encode a date and serial into a HIYES document number
    Generate(NumberGenerateArgs),
    /// Decode a HIYES document number into its components
    Parse(NumberParseArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Number {
            command: NumberCommand::Generate(args),
        } => run_number_generate(args),
        Command::Number {
            command: NumberCommand::Parse(args),
        } => run_number_parse(args),
        Command::Demo(args) => run_demo(args),
    }
}
