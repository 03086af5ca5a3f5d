use clap::Parser;
use std::process;
use tracing::{Level, warn};

use unitconv::output::{print_conversion, print_error, print_usage};
use unitconv::{Cli, Outcome, Settings, run};

fn main() {
    let cli = Cli::parse();
    let settings = Settings::from_env().merge_cli(&cli);
    init_tracing(settings.log_level);

    for ignored in &settings.ignored {
        warn!("ignoring {ignored}");
    }

    let result = run(&cli).and_then(|outcome| match outcome {
        Outcome::Converted(conversion) => {
            print_conversion(&conversion, settings.format, settings.precision).map(|_| true)
        }
        Outcome::Usage => Ok(false),
    });

    match result {
        Ok(true) => {}
        Ok(false) => {
            print_usage();
            process::exit(1);
        }
        Err(e) => {
            print_error(&e, settings.format);
            process::exit(1);
        }
    }
}

fn init_tracing(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
