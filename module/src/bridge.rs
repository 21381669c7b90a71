//! The `cxx` bridge: host services consumed on one side, vessel entry
//! points exposed on the other. The C++ half lives in `include/` and
//! `cpp/` and is compiled by the build script against the host SDK.

use std::os::raw::c_char;

use orbiter_api::{FileHandle, Key, KeyStates, PtrVesselBox, ScnContext, Vessel};

#[cxx::bridge]
pub mod ffi {
    /// Logical thruster groups understood by the host.
    #[derive(Debug)]
    #[repr(i32)]
    enum THGROUP_TYPE {
        /// Main thrusters.
        #[cxx_name = "THGROUP_MAIN"]
        Main,
        /// Retro thrusters.
        #[cxx_name = "THGROUP_RETRO"]
        Retro,
        /// Hover thrusters.
        #[cxx_name = "THGROUP_HOVER"]
        Hover,
        /// Rotation: pitch up.
        #[cxx_name = "THGROUP_ATT_PITCHUP"]
        AttPitchup,
        /// Rotation: pitch down.
        #[cxx_name = "THGROUP_ATT_PITCHDOWN"]
        AttPitchdown,
        /// Rotation: yaw left.
        #[cxx_name = "THGROUP_ATT_YAWLEFT"]
        AttYawleft,
        /// Rotation: yaw right.
        #[cxx_name = "THGROUP_ATT_YAWRIGHT"]
        AttYawright,
        /// Rotation: bank left.
        #[cxx_name = "THGROUP_ATT_BANKLEFT"]
        AttBankleft,
        /// Rotation: bank right.
        #[cxx_name = "THGROUP_ATT_BANKRIGHT"]
        AttBankright,
        /// Translation: right.
        #[cxx_name = "THGROUP_ATT_RIGHT"]
        AttRight,
        /// Translation: left.
        #[cxx_name = "THGROUP_ATT_LEFT"]
        AttLeft,
        /// Translation: up.
        #[cxx_name = "THGROUP_ATT_UP"]
        AttUp,
        /// Translation: down.
        #[cxx_name = "THGROUP_ATT_DOWN"]
        AttDown,
        /// Translation: forward.
        #[cxx_name = "THGROUP_ATT_FORWARD"]
        AttForward,
        /// Translation: back.
        #[cxx_name = "THGROUP_ATT_BACK"]
        AttBack,
        /// First user-defined thruster group.
        #[cxx_name = "THGROUP_USER"]
        User = 0x40,
    }

    /// Access mode for host config and scenario files.
    #[derive(Debug)]
    #[repr(i32)]
    enum FileAccessMode {
        /// Open an existing file for reading.
        #[cxx_name = "FILE_IN"]
        Read = 0,
        /// Create or truncate for writing.
        #[cxx_name = "FILE_OUT"]
        Write = 1,
        /// Open for appending.
        #[cxx_name = "FILE_APP"]
        Append = 2,
        /// Open for reading; a null handle is returned on failure.
        #[cxx_name = "FILE_IN_ZEROONFAIL"]
        ReadZeroOnFail = 3,
    }

    /// Directory the host resolves a relative file name against.
    #[derive(Debug)]
    #[repr(i32)]
    enum PathRoot {
        /// The host installation root.
        #[cxx_name = "ROOT"]
        Root = 0,
        /// The config folder.
        #[cxx_name = "CONFIG"]
        Config = 1,
        /// The scenario folder.
        #[cxx_name = "SCENARIOS"]
        Scenarios = 2,
        /// The texture folder.
        #[cxx_name = "TEXTURES"]
        Textures = 3,
        /// The high-res texture folder.
        #[cxx_name = "TEXTURES2"]
        Textures2 = 4,
        /// The mesh folder.
        #[cxx_name = "MESHES"]
        Meshes = 5,
        /// The module folder.
        #[cxx_name = "MODULES"]
        Modules = 6,
    }

    unsafe extern "C++" {
        include!("include/vessel_adapter.h");

        type VesselBox = Box<dyn orbiter_api::Vessel>;
        type PtrVesselBox = orbiter_api::PtrVesselBox;

        type VECTOR3 = orbiter_api::Vector3;
        type VESSELSTATUS = orbiter_api::VesselStatus;
        type THRUSTER_HANDLE = orbiter_api::ThrusterHandle;
        type PROPELLANT_HANDLE = orbiter_api::PropellantHandle;
        type THGROUP_HANDLE = orbiter_api::ThrusterGroupHandle;
        type FILEHANDLE = orbiter_api::FileHandle;
        type OBJHANDLE = orbiter_api::ObjHandle;
        type ScnContext = orbiter_api::ScnContext;
        type THGROUP_TYPE;
        type FileAccessMode;
        type PathRoot;

        /// The adapter deriving the host's vessel base class; owns the slot.
        type VesselAdapter;
        /// The host's abstract vessel base class.
        type VESSEL;

        // Module lifecycle. The adapter is created with an empty slot, the
        // constructed vessel is moved in, and the upcast pointer is what the
        // host loader receives and later hands back for destruction.
        unsafe fn vessel_module_create(hvessel: OBJHANDLE, flight_model: i32)
            -> *mut VesselAdapter;
        unsafe fn vessel_module_attach(adapter: *mut VesselAdapter, vessel: VesselBox);
        unsafe fn vessel_module_upcast(adapter: *mut VesselAdapter) -> *mut VESSEL;
        unsafe fn vessel_module_destroy(vessel: *mut VESSEL);

        // Vessel services; each is one conversion plus one host SDK call.
        fn set_size(self: &VesselAdapter, size: f64);
        fn set_pmi(self: &VesselAdapter, pmi: &VECTOR3);
        fn set_empty_mass(self: &VesselAdapter, mass: f64);
        fn set_camera_offset(self: &VesselAdapter, offset: &VECTOR3);
        fn set_touchdown_points(
            self: &VesselAdapter,
            pt1: &VECTOR3,
            pt2: &VECTOR3,
            pt3: &VECTOR3,
        );
        fn set_thruster_dir(self: &VesselAdapter, th: THRUSTER_HANDLE, dir: &VECTOR3);
        fn set_thruster_level(self: &VesselAdapter, th: THRUSTER_HANDLE, level: f64);
        fn add_mesh(self: &VesselAdapter, name: &str);
        fn add_mesh_with_offset(self: &VesselAdapter, name: &str, offset: &VECTOR3);
        fn clear_meshes(self: &VesselAdapter);
        fn add_exhaust(self: &VesselAdapter, th: THRUSTER_HANDLE, lscale: f64, wscale: f64)
            -> usize;
        fn create_propellant_resource(self: &VesselAdapter, mass: f64) -> PROPELLANT_HANDLE;
        fn propellant_mass(self: &VesselAdapter, ph: PROPELLANT_HANDLE) -> f64;
        fn create_thruster(
            self: &VesselAdapter,
            pos: &VECTOR3,
            dir: &VECTOR3,
            max_thrust: f64,
            ph: PROPELLANT_HANDLE,
            isp: f64,
        ) -> THRUSTER_HANDLE;
        fn create_thruster_group(
            self: &VesselAdapter,
            thrusters: &[THRUSTER_HANDLE],
            group: THGROUP_TYPE,
        ) -> THGROUP_HANDLE;
        fn thruster_group_level(self: &VesselAdapter, group: THGROUP_HANDLE) -> f64;
        fn thruster_group_level_by_type(self: &VesselAdapter, group: THGROUP_TYPE) -> f64;
        fn name(self: &VesselAdapter) -> &str;
        fn status(self: &VesselAdapter, out: &mut VESSELSTATUS);
        fn angular_velocity(self: &VesselAdapter, out: &mut VECTOR3);
        fn local_to_rel(self: &VesselAdapter, local: &VECTOR3, rel: &mut VECTOR3);
        fn parse_scenario_line(self: &VesselAdapter, line: &str, context: ScnContext);

        // Free host services.
        /// Spawn a new vessel in the host's world from a state snapshot.
        fn create_vessel(name: &str, classname: &str, status: &VESSELSTATUS) -> OBJHANDLE;
        /// Print to the host's on-screen debug slot; overwritten every call.
        fn debug_string(text: &str);
        fn write_log(line: &str);

        // Config and scenario file I/O.
        fn open_file(name: &str, mode: FileAccessMode, root: PathRoot) -> FILEHANDLE;
        fn close_file(file: FILEHANDLE, mode: FileAccessMode);
        fn read_item_string(file: FILEHANDLE, item: &str, value: &mut String) -> bool;
        fn read_item_f64(file: FILEHANDLE, item: &str, value: &mut f64) -> bool;
        fn read_item_i32(file: FILEHANDLE, item: &str, value: &mut i32) -> bool;
        fn read_item_bool(file: FILEHANDLE, item: &str, value: &mut bool) -> bool;
        fn read_item_vec(file: FILEHANDLE, item: &str, value: &mut VECTOR3) -> bool;
        fn write_item_string(file: FILEHANDLE, item: &str, value: &str);
        fn write_item_f64(file: FILEHANDLE, item: &str, value: f64);
        fn write_item_i32(file: FILEHANDLE, item: &str, value: i32);
        fn write_item_bool(file: FILEHANDLE, item: &str, value: bool);
        fn write_item_vec(file: FILEHANDLE, item: &str, value: &VECTOR3);
        fn scenario_next_line(scn: FILEHANDLE, line: &mut String) -> bool;
        fn write_scenario_string(scn: FILEHANDLE, tag: &str, value: &str);
        fn write_scenario_f64(scn: FILEHANDLE, tag: &str, value: f64);
        fn write_scenario_i32(scn: FILEHANDLE, tag: &str, value: i32);
        fn write_scenario_vec(scn: FILEHANDLE, tag: &str, value: &VECTOR3);
    }

    extern "Rust" {
        fn vessel_set_class_caps(vessel: &mut VesselBox, cfg: FILEHANDLE);
        fn vessel_pre_step(vessel: &mut VesselBox, sim_t: f64, sim_dt: f64, mjd: f64);
        fn vessel_post_step(vessel: &mut VesselBox, sim_t: f64, sim_dt: f64, mjd: f64);
        unsafe fn vessel_consume_buffered_key(
            vessel: &mut VesselBox,
            key: u32,
            down: bool,
            kstate: *mut c_char,
        ) -> i32;
        fn vessel_load_state(vessel: &mut VesselBox, scn: FILEHANDLE, context: ScnContext);
        fn vessel_save_state(vessel: &mut VesselBox, scn: FILEHANDLE);
        unsafe fn vessel_box_drop(ptr: PtrVesselBox);
    }
}

// Entry points the C++ adapter forwards every host callback into. Pure
// dispatch; conversions only where the ABI type differs from the trait's.

fn vessel_set_class_caps(vessel: &mut Box<dyn Vessel>, cfg: FileHandle) {
    vessel.set_class_caps(cfg);
}

fn vessel_pre_step(vessel: &mut Box<dyn Vessel>, sim_t: f64, sim_dt: f64, mjd: f64) {
    vessel.pre_step(sim_t, sim_dt, mjd);
}

fn vessel_post_step(vessel: &mut Box<dyn Vessel>, sim_t: f64, sim_dt: f64, mjd: f64) {
    vessel.post_step(sim_t, sim_dt, mjd);
}

unsafe fn vessel_consume_buffered_key(
    vessel: &mut Box<dyn Vessel>,
    key: u32,
    down: bool,
    kstate: *mut c_char,
) -> i32 {
    let kstate = KeyStates::from_raw(kstate);
    vessel.consume_buffered_key(Key::from(key as u8), down, kstate)
}

fn vessel_load_state(vessel: &mut Box<dyn Vessel>, scn: FileHandle, context: ScnContext) {
    vessel.load_state(scn, context);
}

fn vessel_save_state(vessel: &mut Box<dyn Vessel>, scn: FileHandle) {
    vessel.save_state(scn);
}

unsafe fn vessel_box_drop(ptr: PtrVesselBox) {
    orbiter_api::release_vessel_box(ptr);
}
