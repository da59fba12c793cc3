//! LPS22HB register map (ST datasheet DocID027083).
//!
//! Only the registers the driver touches are listed. All addresses are
//! 8-bit register pointers; the 7-bit bus address is handled separately.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Device identification, reads [`WHO_AM_I_VALUE`].
    WhoAmI = 0x0F,
    /// Output data rate, low-pass filter and block data update.
    CtrlReg1 = 0x10,
    // bit 4 - IF_ADD_INC, bit 0 - ONE_SHOT (self-clearing)
    CtrlReg2 = 0x11,
    PressOutXl = 0x28,
    PressOutL = 0x29,
    PressOutH = 0x2A,
    TempOutL = 0x2B,
    TempOutH = 0x2C,
}

impl Register {
    pub(crate) const fn addr(self) -> u8 {
        self as u8
    }
}

/// Expected content of WHO_AM_I.
pub const WHO_AM_I_VALUE: u8 = 0xB1;

/// CTRL_REG1 block data update bit.
pub const CTRL_REG1_BDU: u8 = 0x02;

/// CTRL_REG2 one-shot trigger. Writing it alone also clears IF_ADD_INC.
pub const CTRL_REG2_ONE_SHOT: u8 = 0x01;

/// Pressure LSBs per hPa.
pub const PRESSURE_LSB_PER_HPA: i64 = 4096;

/// Temperature LSBs per °C.
pub const TEMPERATURE_LSB_PER_CELSIUS: i32 = 100;

/// Pressure output registers, least significant first.
pub(crate) const PRESS_OUT: [Register; 3] = [
    Register::PressOutXl,
    Register::PressOutL,
    Register::PressOutH,
];

/// Temperature output registers, least significant first.
pub(crate) const TEMP_OUT: [Register; 2] = [Register::TempOutL, Register::TempOutH];
