use crate::generator::openvpn::to_openvpn;
use crate::models::VpnServer;
use crate::utils::format::{format_number, format_uptime};

/// Render servers as a list of commented OpenVPN configs.
///
/// Each entry is a `# hostname (country)` line, the config and a blank line.
pub fn servers_to_list(servers: &[VpnServer]) -> String {
    let mut result = String::new();

    for server in servers {
        result.push_str(&format!("# {} ({})\n", server.hostname, server.country));
        result.push_str(&to_openvpn(server));
        result.push_str("\n\n");
    }

    result
}

/// Render one summary line per server with human readable statistics.
pub fn servers_to_table(servers: &[VpnServer]) -> String {
    let mut result = format!(
        "{:<20} {:<3} {:>9} {:>6} {:>8} {:>5} {:>10} {:>7} {:>12}\n",
        "HOSTNAME", "CC", "SCORE", "PING", "SPEED", "SESS", "UPTIME", "USERS", "REMOTE"
    );

    for server in servers {
        result.push_str(&format!(
            "{:<20} {:<3} {:>9} {:>6} {:>8} {:>5} {:>10} {:>7} {:>12}\n",
            server.hostname,
            server.country_short,
            server.score,
            format!("{}ms", server.ping.as_millis()),
            format!("{}bps", format_number(server.speed)),
            server.sessions,
            format_uptime(server.uptime),
            format_number(server.users),
            format!("{}/{}:{}", server.proto, server.ip, server.port),
        ));
    }

    result
}

/// Render servers as a pretty printed JSON array.
pub fn servers_to_json(servers: &[VpnServer]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(servers)
}
