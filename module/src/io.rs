//! Config and scenario file I/O.
//!
//! Thin pass-throughs over the host's file services. The host reports
//! missing items with a boolean, surfaced here as `Option`; nothing is
//! parsed or cached in this layer.

use orbiter_api::{FileHandle, Vector3};

use crate::bridge::ffi;

pub use crate::bridge::ffi::{FileAccessMode, PathRoot};

/// Open a file relative to one of the host's folders.
pub fn open(name: &str, mode: FileAccessMode, root: PathRoot) -> FileHandle {
    ffi::open_file(name, mode, root)
}

/// Close a file opened with [open].
pub fn close(file: FileHandle, mode: FileAccessMode) {
    ffi::close_file(file, mode);
}

/// Read a string item from a config file.
pub fn read_item_string(file: FileHandle, item: &str) -> Option<String> {
    let mut value = String::new();
    ffi::read_item_string(file, item, &mut value).then_some(value)
}

/// Read a float item from a config file.
pub fn read_item_f64(file: FileHandle, item: &str) -> Option<f64> {
    let mut value = 0.0;
    ffi::read_item_f64(file, item, &mut value).then_some(value)
}

/// Read an integer item from a config file.
pub fn read_item_i32(file: FileHandle, item: &str) -> Option<i32> {
    let mut value = 0;
    ffi::read_item_i32(file, item, &mut value).then_some(value)
}

/// Read a boolean item from a config file.
pub fn read_item_bool(file: FileHandle, item: &str) -> Option<bool> {
    let mut value = false;
    ffi::read_item_bool(file, item, &mut value).then_some(value)
}

/// Read a vector item from a config file.
pub fn read_item_vec(file: FileHandle, item: &str) -> Option<Vector3> {
    let mut value = Vector3::default();
    ffi::read_item_vec(file, item, &mut value).then_some(value)
}

/// Write a string item to a config file.
pub fn write_item_string(file: FileHandle, item: &str, value: &str) {
    ffi::write_item_string(file, item, value);
}

/// Write a float item to a config file.
pub fn write_item_f64(file: FileHandle, item: &str, value: f64) {
    ffi::write_item_f64(file, item, value);
}

/// Write an integer item to a config file.
pub fn write_item_i32(file: FileHandle, item: &str, value: i32) {
    ffi::write_item_i32(file, item, value);
}

/// Write a boolean item to a config file.
pub fn write_item_bool(file: FileHandle, item: &str, value: bool) {
    ffi::write_item_bool(file, item, value);
}

/// Write a vector item to a config file.
pub fn write_item_vec(file: FileHandle, item: &str, value: Vector3) {
    ffi::write_item_vec(file, item, &value);
}

/// Next line of this vessel's block while the host loads a scenario, or
/// `None` at the end of the block. Only meaningful inside
/// [Vessel::load_state](orbiter_api::Vessel::load_state).
pub fn scenario_next_line(scn: FileHandle) -> Option<String> {
    let mut line = String::new();
    ffi::scenario_next_line(scn, &mut line).then_some(line)
}

/// Write a tagged string line into this vessel's scenario block.
pub fn write_scenario_string(scn: FileHandle, tag: &str, value: &str) {
    ffi::write_scenario_string(scn, tag, value);
}

/// Write a tagged float line into this vessel's scenario block.
pub fn write_scenario_f64(scn: FileHandle, tag: &str, value: f64) {
    ffi::write_scenario_f64(scn, tag, value);
}

/// Write a tagged integer line into this vessel's scenario block.
pub fn write_scenario_i32(scn: FileHandle, tag: &str, value: i32) {
    ffi::write_scenario_i32(scn, tag, value);
}

/// Write a tagged vector line into this vessel's scenario block.
pub fn write_scenario_vec(scn: FileHandle, tag: &str, value: Vector3) {
    ffi::write_scenario_vec(scn, tag, &value);
}
