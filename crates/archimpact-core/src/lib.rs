pub mod element;
pub mod error;
pub mod lookup;
pub mod mapping;
pub mod marks;
pub mod version;

pub use element::*;
pub use error::*;
pub use lookup::*;
pub use mapping::*;
pub use marks::*;
pub use version::*;

#[cfg(test)]
pub(crate) mod testutil;
