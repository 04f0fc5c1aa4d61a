use clap::Parser;
use log::debug;

mod args;
mod table_io;

use crate::args::Args;

fn main() {
    env_logger::init();

    let args = Args::parse();
    debug!("args: {:?}", args);

    match table_io::run_ranking(&args.input, &args.weights, &args.impacts, &args.output) {
        Ok(()) => {
            println!("Success: result saved to {}", args.output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
