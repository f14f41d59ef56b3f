pub mod layout;
pub mod parameters;

pub use layout::*;
pub use parameters::*;
