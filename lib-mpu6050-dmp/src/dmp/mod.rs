//! Everything related to the DMP (Digital Motion Processor): the firmware image and config
//! tables, loading them and the bring-up sequence.

mod bringup;
mod config;
mod firmware;
mod loader;
mod packet;
mod records;

pub use bringup::*;
pub use config::*;
pub use firmware::*;
pub use loader::*;
pub use packet::*;
pub use records::*;
