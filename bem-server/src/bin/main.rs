use std::{env, process::ExitCode};

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bem_server::{load, run, version, AppConfig};

fn main() -> ExitCode {
    let args = env::args().collect::<Vec<_>>();
    let config =
        if args.len() == 3 && (args[1] == "-c" || args[1] == "--config") {
            match load(&args[2]) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("{}", err);
                    return ExitCode::from(err.exit_code());
                }
            }
        } else {
            AppConfig::parse()
        };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("{:#?}", &config);
    info!("{}", version());
    match run(&config) {
        Ok(exit) => ExitCode::from(exit.code()),
        Err(err) => {
            error!("{:?}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
