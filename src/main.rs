mod cli;

use cli::commands::Command;
use cli::Checkers;
use env_logger::Env;
use structopt::StructOpt;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    Checkers::from_args().execute();
}
