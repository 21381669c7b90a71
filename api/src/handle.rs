//! Opaque handles minted by the host.
//!
//! Each is a pointer-width integer the host hands out and expects back
//! unchanged; this layer never dereferences or interprets them.

macro_rules! host_handle {
    ($(#[$meta:meta])* $name:ident, $cxx_name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Raw integer value of the handle.
            pub fn as_raw(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            fn from(raw: usize) -> Self {
                Self(raw)
            }
        }

        // SAFETY: pointer-width integer, layout-identical to the host's
        // handle typedef named by the id.
        unsafe impl cxx::ExternType for $name {
            type Id = cxx::type_id!($cxx_name);
            type Kind = cxx::kind::Trivial;
        }
    };
}

host_handle!(
    /// Handle to a thruster created on this vessel.
    ThrusterHandle,
    "THRUSTER_HANDLE"
);
host_handle!(
    /// Handle to a propellant resource created on this vessel.
    PropellantHandle,
    "PROPELLANT_HANDLE"
);
host_handle!(
    /// Handle to a logical thruster group.
    ThrusterGroupHandle,
    "THGROUP_HANDLE"
);
host_handle!(
    /// Handle to an open host config or scenario file.
    FileHandle,
    "FILEHANDLE"
);
host_handle!(
    /// Handle to an object (vessel, celestial body) in the host's world.
    ObjHandle,
    "OBJHANDLE"
);
host_handle!(
    /// Opaque scenario-state context passed through scenario loading.
    ScnContext,
    "ScnContext"
);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_round_trip() {
        // No bit loss at pointer width.
        for raw in [0usize, 1, 0xdead_beef, usize::MAX] {
            assert_eq!(ThrusterHandle::from(raw).as_raw(), raw);
            assert_eq!(PropellantHandle::from(raw).as_raw(), raw);
            assert_eq!(FileHandle::from(raw).as_raw(), raw);
        }
    }

    #[test]
    fn test_default_is_null() {
        assert_eq!(ThrusterGroupHandle::default().as_raw(), 0);
        assert_eq!(ObjHandle::default().as_raw(), 0);
        assert_eq!(ScnContext::default().as_raw(), 0);
    }

    #[test]
    fn test_layout() {
        assert_eq!(
            std::mem::size_of::<ObjHandle>(),
            std::mem::size_of::<usize>()
        );
    }
}
