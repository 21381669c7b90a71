//! Module entry points invoked by the host's vessel loader, wrapped by
//! [declare_vessel](crate::declare_vessel).

use orbiter_api::{ObjHandle, Vessel};

use crate::bridge::ffi;
use crate::host::HostVessel;

/// Create the adapter for a new vessel instance and populate its slot.
///
/// Two-phase: the adapter is created first with an empty slot so `init` can
/// receive a live [HostVessel] view, then the boxed vessel is moved in. The
/// host only starts invoking callbacks after this returns, so every
/// callback sees a populated slot.
pub fn module_init(
    hvessel: ObjHandle,
    flight_model: i32,
    init: impl FnOnce(HostVessel) -> Box<dyn Vessel>,
) -> *mut ffi::VESSEL {
    let adapter = unsafe { ffi::vessel_module_create(hvessel, flight_model) };
    let host = unsafe { HostVessel::from_adapter(adapter) };
    let vessel = init(host);
    unsafe {
        ffi::vessel_module_attach(adapter, vessel);
        ffi::vessel_module_upcast(adapter)
    }
}

/// Destroy an adapter received back from the host, releasing the vessel
/// object exactly once.
///
/// # Safety
/// `vessel` must be a pointer previously returned by [module_init] that the
/// host will not use again.
pub unsafe fn module_exit(vessel: *mut ffi::VESSEL) {
    ffi::vessel_module_destroy(vessel);
}
