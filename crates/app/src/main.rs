//! osi-sim: walk one food order down an OSI-style layer stack, across a
//! mocked medium, and walk the confirmation back up.
//!
//! Running with no arguments executes the fixed scenario once and prints the
//! layer-by-layer trace to stdout.

mod config;

use config::AppConfig;
use osi_sim_core::server::Server;
use osi_sim_core::stack::build_stack;
use osi_sim_core::{medium, trace, Result};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match AppConfig::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if let Err(error) = run(&config) {
        eprintln!("error: {}", error);
        std::process::exit(1);
    }
}

fn run(config: &AppConfig) -> Result<()> {
    println!("\n=== Starting Food Ordering Simulation (Mocked Network) ===\n");

    if config.print_config {
        config.print();
    }

    let medium = medium::shared();
    let trace = trace::shared(config.quiet);

    let mut client = build_stack(config.client, medium.clone(), trace.clone());
    let mut server = Server::new(config.server, medium.clone(), trace);

    client.start_session();
    server.start_session();

    client.place_order(&config.order)?;

    if config.delay_ms > 0 {
        std::thread::sleep(std::time::Duration::from_millis(config.delay_ms));
    }

    server.handle_next()?;
    client.receive_confirmation()?;

    if config.print_summary {
        medium.borrow().stats().print_summary();
    }

    println!("=== Simulation Complete ===");

    Ok(())
}
