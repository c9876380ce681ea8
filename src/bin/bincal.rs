extern crate bincal as lib;

use flexi_logger::{FileSpec, Logger};
use lib::config::{load_suitable_config, Config};
use lib::render::OutputFormat;
use lib::{parse_year, CalendarBuilder, Holiday};
use std::io::{stdout, Write};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "bincal",
    about = "Draws a year as columns of binary day numbers."
)]
pub struct Args {
    #[structopt(
        help = "year to draw, negative years go after `--`",
        parse(try_from_str = parse_year)
    )]
    pub year: i32,

    #[structopt(
        short = "o",
        long = "output",
        default_value = "text",
        possible_values = &OutputFormat::VARIANTS,
        help = "output format"
    )]
    pub output: OutputFormat,

    #[structopt(
        long = "holiday",
        number_of_values = 1,
        help = "holiday in mm-dd format, may be given multiple times"
    )]
    pub holidays: Vec<Holiday>,

    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn run(args: Args, config: Config) -> lib::Result<()> {
    let calendar = CalendarBuilder::new(args.year)
        .holidays(config.holidays)
        .holidays(args.holidays)
        .week_shift(config.week_shift)
        .build()?;

    log::info!("Drawing {} as {}", args.year, args.output);

    let renderer = args.output.renderer(&config.palettes);
    let stdout = stdout();
    let mut out = stdout.lock();
    renderer.draw_calendar(&calendar, &mut out)?;
    out.flush()?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = &args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    let handle = logger.start()?;

    let config = load_suitable_config(args.configfile.as_deref());
    let result = config.and_then(|config| run(args, config));

    if let Err(err) = result {
        log::error!("{}", err);
        eprintln!("bincal: {}", err);
        drop(handle);
        std::process::exit(1);
    }

    Ok(())
}
