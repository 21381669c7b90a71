//! The host's vessel state snapshot struct.

use crate::handle::ObjHandle;
use crate::vec::Vector3;

/// State snapshot of a vessel, in the layout the host's `VESSELSTATUS`
/// interface version 1 expects. Passed by reference across the boundary in
/// both directions (status queries, vessel spawning) without conversion.
#[derive(Debug, Default)]
#[repr(C)]
pub struct VesselStatus {
    /// Position relative to `rbody` in the ecliptic frame \[m\].
    pub rpos: Vector3,
    /// Velocity relative to `rbody` in the ecliptic frame \[m/s\].
    pub rvel: Vector3,
    /// Rotation velocity about the principal axes \[rad/s\].
    pub vrot: Vector3,
    /// Orientation against the ecliptic frame.
    pub arot: Vector3,
    /// Fuel level, 0 to 1.
    pub fuel: f64,
    /// Main/retro engine setting, -1 to 1.
    pub eng_main: f64,
    /// Hover engine setting, 0 to 1.
    pub eng_hovr: f64,
    /// Reference body.
    pub rbody: ObjHandle,
    /// Docking or landing target, if any.
    pub base: ObjHandle,
    /// Index of the designated docking or landing port.
    pub port: i32,
    /// Flight status: 0 = active (freeflight), 1 = inactive (landed).
    pub status: i32,
    /// Additional vector parameters; `vdata[0]` holds longitude, latitude
    /// and heading of a landed vessel when `status` is 1.
    pub vdata: [Vector3; 10],
    /// Additional floating point parameters (unused).
    pub fdata: [f64; 10],
    /// Additional bitflag parameters; `flag[0] & 1` applies the engine
    /// settings, `flag[0] & 2` applies the fuel level.
    pub flag: [u32; 10],
}

// SAFETY: field-for-field the host's VESSELSTATUS; every member is
// plain-old-data.
unsafe impl cxx::ExternType for VesselStatus {
    type Id = cxx::type_id!("VESSELSTATUS");
    type Kind = cxx::kind::Trivial;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_layout() {
        // 4 vectors, 3 doubles, 2 handles, 2 ints, 10 vectors, 10 doubles,
        // 10 dwords; the handles are the only pointer-width members.
        let expected = 4 * 24 + 3 * 8 + 2 * std::mem::size_of::<usize>() + 2 * 4 + 240 + 80 + 40;
        assert_eq!(std::mem::size_of::<VesselStatus>(), expected);
    }

    #[test]
    fn test_default_is_zeroed() {
        let status = VesselStatus::default();
        assert_eq!(status.fuel, 0.0);
        assert_eq!(status.status, 0);
        assert_eq!(status.rbody.as_raw(), 0);
        assert_eq!(status.vdata[9], Vector3::default());
        assert_eq!(status.flag, [0; 10]);
    }
}
