//! API endpoint modules.

mod domains;
mod networks;
mod system;

pub use domains::DomainsApi;
pub use networks::NetworksApi;
pub use system::SystemApi;
