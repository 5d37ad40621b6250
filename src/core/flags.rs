//! Session flags

use bitflags::bitflags;

bitflags! {
    /// Behaviour switches consulted on every formatted write
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Flags: u8 {
        /// Replace color presets with empty strings
        const NO_COLORS = 0b0001;
    }
}
