//! The trait a vessel module implements, and the boxed-slot plumbing that
//! carries it across the boundary.

use cxx::ExternType;

use crate::handle::{FileHandle, ScnContext};
use crate::key::{Key, KeyStates};

/// Behavior of one vessel instance.
///
/// Implementations are constructed once per vessel the host spawns and
/// dropped exactly once when the host destroys it. The host drives every
/// method from its own (single) thread; there is no reentrancy.
///
/// The host's service surface is reached through the service view handed to
/// the constructor (the binding crate's `HostVessel`).
pub trait Vessel {
    /// Called once after construction to declare the vessel's physical and
    /// visual configuration. `cfg` is the vessel's open config file.
    fn set_class_caps(&mut self, cfg: FileHandle);

    /// Called every simulation tick before the state update, with the
    /// simulation time, tick delta \[s\] and Modified Julian Date.
    fn pre_step(&mut self, sim_t: f64, sim_dt: f64, mjd: f64) {
        let _ = (sim_t, sim_dt, mjd);
    }

    /// Called every simulation tick after the state update.
    fn post_step(&mut self, sim_t: f64, sim_dt: f64, mjd: f64) {
        let _ = (sim_t, sim_dt, mjd);
    }

    /// Called on a buffered key event. Return nonzero to mark the key
    /// consumed; the default leaves every key to the host.
    fn consume_buffered_key(&mut self, key: Key, down: bool, kstate: KeyStates) -> i32 {
        let _ = (key, down, kstate);
        0
    }

    /// Called while the host reads this vessel's block of a scenario file.
    ///
    /// Drain the block with the binding crate's `io::scenario_next_line`,
    /// handing unrecognized lines to `HostVessel::parse_scenario_line`
    /// together with `context` so the host applies its defaults.
    fn load_state(&mut self, scn: FileHandle, context: ScnContext) {
        let _ = (scn, context);
    }

    /// Called when the host saves this vessel's block of a scenario file.
    fn save_state(&mut self, scn: FileHandle) {
        let _ = scn;
    }
}

// The C++ side stores the boxed vessel in a two-word move-only slot and
// treats it as trivially relocatable, per dtolnay/cxx#672.
//
// SAFETY: Box<dyn Vessel> is two words (pointer + vtable) with no interior
// pointers into itself; relocating the bytes relocates ownership.
unsafe impl ExternType for Box<dyn Vessel> {
    type Id = cxx::type_id!("VesselBox");
    type Kind = cxx::kind::Trivial;
}

/// Pointer to a slot holding a boxed vessel, as the C++ side sees it.
#[doc(hidden)]
#[repr(transparent)]
pub struct PtrVesselBox(*mut Box<dyn Vessel>);

// SAFETY: a plain pointer.
unsafe impl ExternType for PtrVesselBox {
    type Id = cxx::type_id!("PtrVesselBox");
    type Kind = cxx::kind::Trivial;
}

/// Release entry point for a non-empty slot. The C++ slot calls this exactly
/// once, from whichever instance holds the object last; moved-from and
/// default-constructed slots never reach it.
///
/// # Safety
/// `ptr` must point to a live, initialized `Box<dyn Vessel>` that is not
/// used again afterwards.
#[doc(hidden)]
pub unsafe fn release_vessel_box(ptr: PtrVesselBox) {
    std::ptr::drop_in_place(ptr.0);
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Probe {
        drops: Arc<AtomicUsize>,
    }

    impl Drop for Probe {
        fn drop(&mut self) {
            self.drops.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl Vessel for Probe {
        fn set_class_caps(&mut self, _cfg: FileHandle) {}
    }

    fn probe() -> (Box<dyn Vessel>, Arc<AtomicUsize>) {
        let drops = Arc::new(AtomicUsize::new(0));
        (Box::new(Probe { drops: drops.clone() }), drops)
    }

    #[test]
    fn test_release_fires_once() {
        let (vessel, drops) = probe();
        let mut slot = vessel;
        unsafe { release_vessel_box(PtrVesselBox(&mut slot)) };
        std::mem::forget(slot);
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_release_fires_once_after_moves() {
        // Ownership follows the bytes; whichever slot holds the object last
        // is the one released.
        let (vessel, drops) = probe();
        let first = vessel;
        let second = first;
        let mut last = second;
        assert_eq!(drops.load(Ordering::SeqCst), 0);
        unsafe { release_vessel_box(PtrVesselBox(&mut last)) };
        std::mem::forget(last);
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_without_callbacks_releases_once() {
        let (vessel, drops) = probe();
        drop(vessel);
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_key_flag_passes_through() {
        struct Toggle;
        impl Vessel for Toggle {
            fn set_class_caps(&mut self, _cfg: FileHandle) {}
            fn consume_buffered_key(&mut self, key: Key, down: bool, _kstate: KeyStates) -> i32 {
                (down && key == Key::L) as i32
            }
        }

        // Dispatch through the boxed object, as the adapter's forwarder does.
        let mut vessel: Box<dyn Vessel> = Box::new(Toggle);
        let mut raw = [0; crate::key::KEY_STATE_LEN];
        assert_eq!(
            vessel.consume_buffered_key(Key::L, true, KeyStates::from(&mut raw)),
            1
        );
        assert_eq!(
            vessel.consume_buffered_key(Key::L, false, KeyStates::from(&mut raw)),
            0
        );
        assert_eq!(
            vessel.consume_buffered_key(Key::K, true, KeyStates::from(&mut raw)),
            0
        );
    }

    #[test]
    fn test_default_callbacks_are_inert() {
        let (mut vessel, _drops) = probe();
        vessel.pre_step(0.0, 0.1, 51544.5);
        vessel.post_step(0.0, 0.1, 51544.5);
        vessel.load_state(FileHandle::default(), ScnContext::default());
        vessel.save_state(FileHandle::default());
        let mut raw = [0; crate::key::KEY_STATE_LEN];
        let handled =
            vessel.consume_buffered_key(Key::L, true, KeyStates::from(&mut raw));
        assert_eq!(handled, 0);
    }
}
