//! Share command implementation

use std::net::{IpAddr, Ipv4Addr};

use crate::cli::ShareArgs;
use crate::config::Config;
use crate::error::{RaindropError, Result};
use crate::server::{run_share_server, ShareState};
use crate::share::ShareService;

/// Run the share server until it is stopped
pub fn run(args: ShareArgs, config: &Config) -> Result<()> {
    let service = ShareService::new(args.file.as_deref(), args.content.as_deref(), args.message)?;
    let port = args.port.unwrap_or(config.share.port);

    println!(
        "{}",
        banner(service.shared_file_name().as_deref(), port, &network_addresses())
    );

    actix_web::rt::System::new()
        .block_on(run_share_server(&config.server.host, port, ShareState::new(service)))
        .map_err(RaindropError::Server)
}

/// Non-loopback IPv4 addresses of this machine, where other devices can reach the server.
fn network_addresses() -> Vec<Ipv4Addr> {
    match if_addrs::get_if_addrs() {
        Ok(interfaces) => interfaces
            .iter()
            .filter(|iface| !iface.is_loopback())
            .filter_map(|iface| match iface.ip() {
                IpAddr::V4(ip) => Some(ip),
                IpAddr::V6(_) => None,
            })
            .collect(),
        Err(err) => {
            tracing::warn!(error = %err, "Cannot list network interfaces");
            Vec::new()
        }
    }
}

fn banner(file_name: Option<&str>, port: u16, addresses: &[Ipv4Addr]) -> String {
    let mut lines = vec![format!("Local: http://localhost:{}/", port)];
    lines.extend(
        addresses
            .iter()
            .map(|ip| format!("Network: http://{}:{}/", ip, port)),
    );
    match file_name {
        Some(name) => lines.push(format!("Sharing: {}", name)),
        None => lines.push("No file shared".to_string()),
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_lists_url_and_file() {
        assert_eq!(
            banner(Some("movie.mp4"), 1130, &[]),
            "Local: http://localhost:1130/\nSharing: movie.mp4"
        );
        assert!(banner(None, 80, &[]).ends_with("No file shared"));
    }

    #[test]
    fn test_banner_lists_network_addresses() {
        let addresses = [Ipv4Addr::new(192, 168, 1, 20), Ipv4Addr::new(10, 0, 0, 5)];
        assert_eq!(
            banner(Some("a.zip"), 1130, &addresses),
            "Local: http://localhost:1130/\n\
             Network: http://192.168.1.20:1130/\n\
             Network: http://10.0.0.5:1130/\n\
             Sharing: a.zip"
        );
    }

    #[test]
    fn test_network_addresses_skip_loopback() {
        assert!(!network_addresses().iter().any(|ip| ip.is_loopback()));
    }
}
