mod domain;
mod lenient;
mod location;
mod network;
mod system;

pub use domain::*;
pub use location::*;
pub use network::*;
pub use system::*;
