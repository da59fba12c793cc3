//! Conversion of raw output register contents into fixed-point readings.

use crate::registers::{PRESSURE_LSB_PER_HPA, TEMPERATURE_LSB_PER_CELSIUS};

/// Assemble PRESS_OUT_XL/L/H into the 24-bit unsigned raw pressure.
pub(crate) fn raw_pressure(bytes: [u8; 3]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0])
}

/// Assemble TEMP_OUT_L/H into the signed raw temperature.
pub(crate) fn raw_temperature(bytes: [u8; 2]) -> i16 {
    i16::from_le_bytes(bytes)
}

/// Raw pressure to hPa × 1000, truncated.
pub(crate) fn pressure_millis(raw: u32) -> i32 {
    // 0xFF_FFFF * 1000 / 4096 < i32::MAX
    (i64::from(raw) * 1000 / PRESSURE_LSB_PER_HPA) as i32
}

/// Raw temperature to milli-degrees Celsius.
pub(crate) fn temperature_millis(raw: i16) -> i32 {
    i32::from(raw) * 1000 / TEMPERATURE_LSB_PER_CELSIUS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure() {
        assert_eq!(raw_pressure([0x00, 0x00, 0x40]), 0x40_0000);
        assert_eq!(pressure_millis(raw_pressure([0x00, 0x00, 0x40])), 1_024_000);
        assert_eq!(raw_pressure([0xFF, 0xFF, 0xFF]), 16_777_215);
        assert_eq!(pressure_millis(raw_pressure([0xFF, 0xFF, 0xFF])), 4_095_999);
        assert_eq!(pressure_millis(0), 0);
    }

    #[test]
    fn pressure_byte_order() {
        // 0x3F_7000 = 4157440 LSB = 1015 hPa
        assert_eq!(raw_pressure([0x00, 0x70, 0x3F]), 0x3F_7000);
        assert_eq!(pressure_millis(0x3F_7000), 1_015_000);
    }

    #[test]
    fn temperature() {
        assert_eq!(temperature_millis(raw_temperature([0x00, 0x00])), 0);
        assert_eq!(temperature_millis(raw_temperature([0xE8, 0x03])), 10_000);
    }

    #[test]
    fn negative_temperature() {
        assert_eq!(raw_temperature([0xFF, 0xFF]), -1);
        assert_eq!(temperature_millis(raw_temperature([0xFF, 0xFF])), -10);
        // -40.00 °C
        assert_eq!(temperature_millis(raw_temperature([0x60, 0xF0])), -40_000);
        assert_eq!(temperature_millis(i16::MIN), -327_680);
    }
}
