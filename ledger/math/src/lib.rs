mod error;
mod traits;
mod udec;
mod uint;

pub use {error::*, traits::*, udec::*, uint::*};
