/// Full-scale value of a signed 32-bit sample.
pub const I32_FULL_SCALE: f64 = 2_147_483_647.0;

/// Convert one float sample to a signed 32-bit sample.
///
/// The input is clamped to `[-1.0, 1.0]` first, so a chord whose sum exceeds
/// full scale clips instead of wrapping around. The scaling runs in f64, where
/// `2147483647.0` is exact, and the result is truncated toward zero.
#[inline]
pub fn to_i32(sample: f32) -> i32 {
    let clamped = sample.clamp(-1.0, 1.0) as f64;
    (clamped * I32_FULL_SCALE) as i32
}

/// Convert `src` into `dst` element by element, over the shorter of the two.
pub fn write_i32(src: &[f32], dst: &mut [i32]) {
    for (out, &sample) in dst.iter_mut().zip(src) {
        *out = to_i32(sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_scale_endpoints() {
        assert_eq!(to_i32(1.0), 2_147_483_647);
        assert_eq!(to_i32(-1.0), -2_147_483_647);
        assert_eq!(to_i32(0.0), 0);
        assert_eq!(to_i32(-0.0), 0);
    }

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(to_i32(0.5), 1_073_741_823);
        assert_eq!(to_i32(-0.5), -1_073_741_823);
    }

    #[test]
    fn out_of_range_is_clamped_not_wrapped() {
        assert_eq!(to_i32(1.3), i32::MAX);
        assert_eq!(to_i32(-4.0), -2_147_483_647);
        assert_eq!(to_i32(f32::INFINITY), i32::MAX);
    }

    #[test]
    fn nan_maps_to_silence() {
        // f32::clamp passes NaN through and a NaN cast saturates to 0
        assert_eq!(to_i32(f32::NAN), 0);
    }

    #[test]
    fn write_stops_at_shorter_slice() {
        let src = [0.0, 1.0, -1.0];
        let mut dst = [7i32; 5];
        write_i32(&src, &mut dst);
        assert_eq!(dst, [0, 2_147_483_647, -2_147_483_647, 7, 7]);
    }
}
