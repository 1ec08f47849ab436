mod constants;
mod editors;
mod fake;
mod pods;

pub use constants::*;
pub use editors::*;
pub use fake::*;
pub use pods::*;
