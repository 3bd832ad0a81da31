use anyhow::{Context, Result};
use std::env;
use tracing_subscriber::EnvFilter;

use update_ip::commands::{detect_local_ip, update_ip_configuration};
use update_ip::models::UpdateRequest;
use update_ip::Workspace;

fn print_usage() {
    println!("Usage:");
    println!("  update_ip <ip_address> [backend_port] [frontend_port]");
    println!("  update_ip auto [backend_port] [frontend_port]   (detect IP from the local hostname)");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let ip = match args.get(1).map(String::as_str) {
        None | Some("help" | "-h" | "--help") => {
            print_usage();
            return Ok(());
        }
        Some(a) if a.eq_ignore_ascii_case("auto") => {
            let ip = detect_local_ip()
                .context("could not detect the IP automatically; please provide the IP address manually")?;
            println!("Detected IP address: {ip}");
            ip.to_string()
        }
        Some(a) => a.to_string(),
    };

    let req = UpdateRequest {
        ip: Some(ip),
        backend_port: args.get(2).cloned(),
        frontend_port: args.get(3).cloned(),
    };

    let ws = Workspace::current().context("cannot determine the working directory")?;
    update_ip_configuration(&ws, &req)?;
    Ok(())
}
