#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod handle;
mod key;
mod status;
mod vec;
mod vessel;

pub use handle::{
    FileHandle, ObjHandle, PropellantHandle, ScnContext, ThrusterGroupHandle, ThrusterHandle,
};
pub use key::{Key, KeyStates, KEY_STATE_LEN};
pub use status::VesselStatus;
pub use vec::{vec3, Vector3};
pub use vessel::Vessel;

#[doc(hidden)]
pub use vessel::{release_vessel_box, PtrVesselBox};
