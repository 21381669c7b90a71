//! Safe service view handed to a vessel's constructor.

use orbiter_api::{
    PropellantHandle, ScnContext, ThrusterGroupHandle, ThrusterHandle, Vector3, VesselStatus,
};

use crate::bridge::ffi;
use crate::ThrusterGroupType;

/// A vessel's view of the host services, valid for the vessel's lifetime.
///
/// Handed to the constructor passed to [declare_vessel](crate::declare_vessel)
/// and typically stored in the vessel struct. Every method is a single host
/// SDK call; the host neither retries nor translates failures, and neither
/// does this layer.
///
/// The host owns the underlying adapter and destroys it only after the
/// vessel object has been released, so a view stored in the vessel it was
/// created for cannot dangle.
#[derive(Debug, Clone, Copy)]
pub struct HostVessel {
    adapter: *const ffi::VesselAdapter,
}

impl HostVessel {
    /// # Safety
    /// `adapter` must point to a live adapter that outlives the vessel this
    /// view is handed to.
    pub(crate) unsafe fn from_adapter(adapter: *const ffi::VesselAdapter) -> Self {
        Self { adapter }
    }

    fn adapter(&self) -> &ffi::VesselAdapter {
        // Kept alive by the host for as long as the vessel exists.
        unsafe { &*self.adapter }
    }

    /// Set the vessel's mean radius \[m\].
    pub fn set_size(&self, size: f64) {
        self.adapter().set_size(size);
    }

    /// Set the principal moments of inertia, mass-normalized \[m²\].
    pub fn set_pmi(&self, pmi: Vector3) {
        self.adapter().set_pmi(&pmi);
    }

    /// Set the vessel's mass without propellants \[kg\].
    pub fn set_empty_mass(&self, mass: f64) {
        self.adapter().set_empty_mass(mass);
    }

    /// Set the cockpit camera position in vessel coordinates.
    pub fn set_camera_offset(&self, offset: Vector3) {
        self.adapter().set_camera_offset(&offset);
    }

    /// Set the three surface contact points in vessel coordinates.
    pub fn set_touchdown_points(&self, pt1: Vector3, pt2: Vector3, pt3: Vector3) {
        self.adapter().set_touchdown_points(&pt1, &pt2, &pt3);
    }

    /// Redirect a thruster's thrust vector.
    pub fn set_thruster_dir(&self, th: ThrusterHandle, dir: Vector3) {
        self.adapter().set_thruster_dir(th, &dir);
    }

    /// Set a thruster's level, 0 to 1.
    pub fn set_thruster_level(&self, th: ThrusterHandle, level: f64) {
        self.adapter().set_thruster_level(th, level);
    }

    /// Load a mesh by name from the host's mesh folder.
    pub fn add_mesh(&self, name: &str) {
        self.adapter().add_mesh(name);
    }

    /// Load a mesh with an offset in vessel coordinates.
    pub fn add_mesh_with_offset(&self, name: &str, offset: Vector3) {
        self.adapter().add_mesh_with_offset(name, &offset);
    }

    /// Remove all meshes.
    pub fn clear_meshes(&self) {
        self.adapter().clear_meshes();
    }

    /// Attach an exhaust render effect to a thruster; returns the host's
    /// exhaust index.
    pub fn add_exhaust(&self, th: ThrusterHandle, lscale: f64, wscale: f64) -> usize {
        self.adapter().add_exhaust(th, lscale, wscale)
    }

    /// Create a propellant resource holding `mass` \[kg\].
    pub fn create_propellant_resource(&self, mass: f64) -> PropellantHandle {
        self.adapter().create_propellant_resource(mass)
    }

    /// Current mass \[kg\] of a propellant resource.
    pub fn propellant_mass(&self, ph: PropellantHandle) -> f64 {
        self.adapter().propellant_mass(ph)
    }

    /// Create a thruster at `pos` thrusting along `dir`, fed by `ph`.
    pub fn create_thruster(
        &self,
        pos: Vector3,
        dir: Vector3,
        max_thrust: f64,
        ph: PropellantHandle,
        isp: f64,
    ) -> ThrusterHandle {
        self.adapter().create_thruster(&pos, &dir, max_thrust, ph, isp)
    }

    /// Gather thrusters into one of the host's logical groups.
    pub fn create_thruster_group(
        &self,
        thrusters: &[ThrusterHandle],
        group: ThrusterGroupType,
    ) -> ThrusterGroupHandle {
        self.adapter().create_thruster_group(thrusters, group)
    }

    /// Mean level of a thruster group, by handle.
    pub fn thruster_group_level(&self, group: ThrusterGroupHandle) -> f64 {
        self.adapter().thruster_group_level(group)
    }

    /// Mean level of a thruster group, by group type.
    pub fn thruster_group_level_by_type(&self, group: ThrusterGroupType) -> f64 {
        self.adapter().thruster_group_level_by_type(group)
    }

    /// The vessel's name in the host's world.
    pub fn name(&self) -> &str {
        self.adapter().name()
    }

    /// Snapshot of the vessel's state.
    pub fn status(&self) -> VesselStatus {
        let mut out = VesselStatus::default();
        self.adapter().status(&mut out);
        out
    }

    /// Angular velocity around the principal axes \[rad/s\].
    pub fn angular_velocity(&self) -> Vector3 {
        let mut out = Vector3::default();
        self.adapter().angular_velocity(&mut out);
        out
    }

    /// Transform a point from vessel coordinates to coordinates relative to
    /// the reference body.
    pub fn local_to_rel(&self, local: Vector3) -> Vector3 {
        let mut rel = Vector3::default();
        self.adapter().local_to_rel(&local, &mut rel);
        rel
    }

    /// Hand a scenario line the vessel does not recognize back to the host
    /// for default processing. `context` is the opaque state passed to
    /// [Vessel::load_state](orbiter_api::Vessel::load_state).
    pub fn parse_scenario_line(&self, line: &str, context: ScnContext) {
        self.adapter().parse_scenario_line(line, context);
    }
}
