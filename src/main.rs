use clap::Parser;
use ndn_logstat::app::{self, AppConfig};
use ndn_logstat::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::new(cli.verbose) {
        Ok(config) => config,
        Err(e) => app::handle_fatal_error(e, cli.verbose),
    };
    app::init_logging(&config);

    match app::execute(&cli, &config) {
        Ok(report) => print!("{}", app::render_report(&report, cli.quiet, cli.summary)),
        Err(e) => app::handle_fatal_error(e, cli.verbose),
    }
}
