use std::ops::BitOr;

/// Raw `D3D11_CREATE_DEVICE_FLAG` bits as passed by the caller.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct CreateDeviceFlags(pub u32);

impl CreateDeviceFlags {
    pub const SINGLETHREADED: Self = Self(0x1);
    pub const DEBUG: Self = Self(0x2);
    pub const BGRA_SUPPORT: Self = Self(0x20);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// The interop device must be able to back B8G8R8A8 swap chains.
    pub fn with_bgra_support(self) -> Self {
        self | Self::BGRA_SUPPORT
    }
}

impl BitOr for CreateDeviceFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::CreateDeviceFlags;

    #[test]
    fn bgra_support_is_added_without_dropping_caller_bits() {
        let flags = CreateDeviceFlags::DEBUG.with_bgra_support();
        assert!(flags.contains(CreateDeviceFlags::DEBUG));
        assert!(flags.contains(CreateDeviceFlags::BGRA_SUPPORT));
        assert!(!flags.contains(CreateDeviceFlags::SINGLETHREADED));
    }

    #[test]
    fn forcing_bgra_twice_is_a_no_op() {
        let once = CreateDeviceFlags::default().with_bgra_support();
        assert_eq!(once.with_bgra_support(), once);
        assert_eq!(once, CreateDeviceFlags::BGRA_SUPPORT);
    }
}
