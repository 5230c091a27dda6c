use clap::{ArgAction, Parser};

pub struct Cli;

impl Cli {
    pub fn run(&self) -> CliProgram {
        CliProgram::parse()
    }
}

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliProgram {
    #[arg(
        value_name = "EXPORT_PATH",
        help = "Grayjay export, zip file or directory (asked for interactively when omitted)"
    )]
    pub export_path: Option<String>,

    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Log more details (-v for progress, -vv for every skipped record)"
    )]
    pub verbose: u8,
}

impl CliProgram {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
