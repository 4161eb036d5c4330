//! dexfetch core: fetch one Pokémon record, report it, save its sprites.

pub mod config;
pub mod logging;

pub mod error;
pub mod fetch;
pub mod http;
pub mod model;
pub mod report;
pub mod sprites;

pub use error::FetchError;
