pub mod config;
pub mod provider;
pub mod registry;
pub mod rule;
pub mod step;

pub use config::*;
pub use provider::*;
pub use registry::*;
pub use rule::*;
pub use step::*;
