mod ui;

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use gbacklight::{GbacklightBuilder, GbacklightConfig, GbacklightError};

use clap::Parser;

/// Adjust the backlight of RandR outputs with a slider
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// X display to connect to, defaults to $DISPLAY
    #[arg(short, long, value_name = "display")]
    display: Option<String>,

    /// Regular expression for the output names to control
    #[arg(short, long, value_name = "regex")]
    output: Option<String>,

    /// Config file to read instead of ~/.config/gbacklight/config.toml
    #[arg(short, long, value_name = "path")]
    config: Option<PathBuf>,
}

const EXIT_FAILURE: u8 = 1;

fn main() -> ExitCode {
    env_logger::init();

    let status = match parse_args(std::env::args_os()) {
        Ok(args) => exit_status(run(args)),
        Err(status) => status,
    };
    ExitCode::from(status)
}

/// Parse the command line, printing usage and returning the exit status on failure.
/// `--help` and bad arguments alike exit with 1.
fn parse_args<I, T>(args: I) -> Result<Args, u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(args).map_err(|err| {
        let _ = err.print();
        EXIT_FAILURE
    })
}

fn exit_status(result: Result<u8, GbacklightError>) -> u8 {
    match result {
        Ok(status) => status,
        Err(err) => {
            eprintln!("{err}");
            EXIT_FAILURE
        }
    }
}

fn run(args: Args) -> Result<u8, GbacklightError> {
    let config = match &args.config {
        Some(path) => GbacklightConfig::from_path(path)?,
        None => GbacklightConfig::new()?,
    };
    let window_config = config.window.clone();

    let gbacklight = GbacklightBuilder::new()
        .with_display(args.display.as_deref())
        .with_output_regex(args.output.as_deref())
        .with_config(config)
        .build()?;
    let percentage = gbacklight.get_percentage()?;
    log::debug!("starting at {percentage}%");

    let code = ui::run(gbacklight, percentage, window_config);
    Ok(u8::try_from(code).unwrap_or(EXIT_FAILURE))
}
