use crate::models::VpnServer;

/// Convert a server to an OpenVPN client config
///
/// The config uses the connection values and the three certificate blocks
/// extracted from the feed, so parsing it again yields the same values.
///
/// # Arguments
/// * `server` - Server to convert
pub fn to_openvpn(server: &VpnServer) -> String {
    format!(
        "dev tun
proto {proto}
remote {ip} {port}
cipher {cipher}
auth {auth}
resolv-retry infinite
nobind
persist-key
persist-tun
client
verb 3
<ca>
{ca}
</ca>
<cert>
{cert}
</cert>
<key>
{key}
</key>",
        proto = server.proto,
        ip = server.ip,
        port = server.port,
        cipher = server.cipher,
        auth = server.auth,
        ca = server.ca,
        cert = server.cert,
        key = server.key,
    )
}

impl VpnServer {
    /// OpenVPN client config of this server.
    pub fn openvpn_config(&self) -> String {
        to_openvpn(self)
    }
}
