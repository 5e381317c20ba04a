pub mod listing;
pub mod openvpn;

// Re-export renderers
pub use listing::{servers_to_json, servers_to_list, servers_to_table};
pub use openvpn::to_openvpn;
