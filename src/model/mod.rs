pub mod identity;
pub mod profile;
pub mod result;
pub mod stats;
pub mod title;

pub use identity::*;
pub use profile::*;
pub use result::*;
pub use stats::*;
pub use title::*;
