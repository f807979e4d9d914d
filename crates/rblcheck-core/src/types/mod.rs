mod address;
mod outcome;
mod zone;

pub use address::*;
pub use outcome::*;
pub use zone::*;
