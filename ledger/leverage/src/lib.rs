mod core;
mod error;
mod genesis;
mod keeper;
mod registry;
mod settings;
mod state;

pub use {error::*, genesis::*, keeper::*, registry::*, settings::*, state::*};
