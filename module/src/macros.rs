/// Declares the two exports the host's module loader looks up.
///
/// `init` receives the vessel's [HostVessel](crate::HostVessel) service view
/// and returns the vessel object; `exit` runs after the vessel object has
/// been released.
///
/// ```ignore
/// declare_vessel!(
///     fn init(host) {
///         MinimalPb::new(host)
///     }
///     fn exit() {}
/// );
/// ```
#[macro_export]
macro_rules! declare_vessel {
    (fn init($host:ident) $init:block fn exit() $exit:block) => {
        #[no_mangle]
        pub extern "C" fn ovcInit(
            hvessel: $crate::ObjHandle,
            flight_model: i32,
        ) -> *mut $crate::ffi::VESSEL {
            $crate::module_init(hvessel, flight_model, |$host| {
                ::std::boxed::Box::new($init)
            })
        }

        #[no_mangle]
        pub extern "C" fn ovcExit(vessel: *mut $crate::ffi::VESSEL) {
            unsafe { $crate::module_exit(vessel) };
            $exit
        }
    };
}

/// Formats a line into the host's on-screen debug slot. Overwritten every
/// call; for debugging only.
///
/// ```ignore
/// debug_string!("sim_t: {:.2}", sim_t);
/// ```
#[macro_export]
macro_rules! debug_string {
    ($($arg:tt)*) => {
        $crate::debug_string(&::std::format!($($arg)*))
    };
}
