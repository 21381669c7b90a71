#![doc = include_str!("../README.md")]

mod bridge;
mod host;
mod macros;
mod module;

pub mod io;
pub mod logging;

pub use orbiter_api::*;

pub use bridge::ffi::{create_vessel, debug_string, THGROUP_TYPE as ThrusterGroupType};
pub use host::HostVessel;
pub use module::{module_exit, module_init};

pub use log;

#[doc(hidden)]
pub use bridge::ffi;
