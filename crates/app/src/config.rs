//! Configuration for the osi-sim application.
//!
//! Handles parsing command-line arguments and generating sensible defaults.
//! The tool works with ZERO arguments, running the fixed ordering scenario
//! with identifiers synthesized from a seed; every default is printable so
//! runs are reproducible.

use osi_sim_core::addr::MacAddr;
use osi_sim_core::config::StackConfig;
use osi_sim_core::order::Order;
use std::net::Ipv4Addr;

/// Complete configuration for one simulation run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // === Scenario ===
    /// The order placed at the application boundary
    pub order: Order,

    // === Identifiers ===
    /// Client-side stack identifiers
    pub client: StackConfig,

    /// Server-side stack identifiers (reply route)
    pub server: StackConfig,

    /// Seed the identifiers were synthesized from
    pub seed: u64,

    // === Behavior ===
    /// Artificial delay between placing the order and serving the reply
    pub delay_ms: u64,

    /// Suppress the layer trace
    pub quiet: bool,

    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print the transfer summary at the end
    pub print_summary: bool,
}

impl AppConfig {
    /// Parse configuration from command-line arguments.
    ///
    /// If no `--seed` is provided, a time-based seed is used; identifiers are
    /// still deterministic for a given seed.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut customer: Option<String> = None;
        let mut food: Option<String> = None;
        let mut quantity: Option<u32> = None;
        let mut address: Option<String> = None;
        let mut seed: Option<u64> = None;
        let mut mac: Option<MacAddr> = None;
        let mut source_ip: Option<Ipv4Addr> = None;
        let mut dest_ip: Option<Ipv4Addr> = None;
        let mut loopback = false;
        let mut delay_ms: Option<u64> = None;
        let mut quiet = false;
        let mut print_config = false;
        let mut print_summary = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--customer" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--customer requires a name".to_string());
                    }
                    customer = Some(args[i].clone());
                }
                "--food" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--food requires a dish".to_string());
                    }
                    food = Some(args[i].clone());
                }
                "--quantity" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--quantity requires a number".to_string());
                    }
                    quantity = Some(args[i].parse().map_err(|_| "invalid quantity")?);
                }
                "--address" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--address requires a delivery address".to_string());
                    }
                    address = Some(args[i].clone());
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--mac" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--mac requires an address".to_string());
                    }
                    mac = Some(args[i].parse().map_err(|e| format!("{}", e))?);
                }
                "--source-ip" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--source-ip requires an address".to_string());
                    }
                    source_ip = Some(args[i].parse().map_err(|_| "invalid source IP")?);
                }
                "--dest-ip" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--dest-ip requires an address".to_string());
                    }
                    dest_ip = Some(args[i].parse().map_err(|_| "invalid destination IP")?);
                }
                "--loopback" => {
                    loopback = true;
                }
                "--delay-ms" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--delay-ms requires a number".to_string());
                    }
                    delay_ms = Some(args[i].parse().map_err(|_| "invalid delay")?);
                }
                "--quiet" => {
                    quiet = true;
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-summary" => {
                    print_summary = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        // Resolve identifiers, applying any explicit overrides
        let (mut client, server_defaults) = StackConfig::synthesized_pair(seed);
        if let Some(mac) = mac {
            client.mac = mac;
        }
        if let Some(ip) = source_ip {
            client.source_ip = ip;
        }
        if let Some(ip) = dest_ip {
            client.destination_ip = ip;
        }
        let mut server = client.reversed(server_defaults.mac);

        if loopback {
            client = StackConfig::loopback();
            server = client.reversed(MacAddr::PLACEHOLDER);
        }

        let config = AppConfig {
            order: Order::new(
                customer.as_deref().unwrap_or("Al Glenrey"),
                food.as_deref().unwrap_or("Pizza"),
                quantity.unwrap_or(2),
                address
                    .as_deref()
                    .unwrap_or("University of the Philippines Cebu, Lahug, Cebu City"),
            ),
            client,
            server,
            seed,
            delay_ms: delay_ms.unwrap_or(1000),
            quiet,
            print_config,
            print_summary,
        };

        Ok(config)
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Customer: {}", self.order.customer);
        println!("Food: {} x {}", self.order.quantity, self.order.food);
        println!("Address: {}", self.order.address);
        println!();
        println!("Seed: {}", self.seed);
        println!("Client MAC: {}", self.client.mac);
        println!("Server MAC: {}", self.server.mac);
        println!(
            "Route: {} > {}",
            self.client.source_ip, self.client.destination_ip
        );
        println!("Delay: {} ms", self.delay_ms);
        println!();
    }
}

fn print_help() {
    println!("osi-sim: Educational OSI-model simulation of a food ordering exchange");
    println!();
    println!("USAGE:");
    println!("    osi-sim [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --customer <NAME>      Customer name (default: Al Glenrey)");
    println!("    --food <DISH>          Dish to order (default: Pizza)");
    println!("    --quantity <N>         How many (default: 2)");
    println!("    --address <ADDR>       Delivery address (default: UP Cebu, Lahug, Cebu City)");
    println!();
    println!("    --seed <N>             Seed for identifier synthesis (default: time-based)");
    println!("    --mac <MAC>            Client MAC token (default: synthesized)");
    println!("    --source-ip <IP>       Client source address (default: synthesized)");
    println!("    --dest-ip <IP>         Destination address (default: 192.168.1.100)");
    println!("    --loopback             Use the loopback fallback identifiers");
    println!();
    println!("    --delay-ms <MS>        Delay before the reply is served (default: 1000)");
    println!("    --quiet                Suppress the layer trace");
    println!("    --no-summary           Don't print the transfer summary");
    println!("    --print-config         Print resolved configuration");
    println!("    --help, -h             Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    osi-sim                            # Run the fixed scenario");
    println!("    osi-sim --seed 42                  # Deterministic identifiers");
    println!("    osi-sim --food Sisig --quantity 1  # A different order");
    println!("    osi-sim --loopback --delay-ms 0    # Fast run, no host flavor");
    println!();
}
