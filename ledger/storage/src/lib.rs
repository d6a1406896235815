mod codec;
mod key;
mod map;
mod path;
mod prefix;
mod set;

pub use {codec::*, key::*, map::*, path::*, prefix::*, set::*};
