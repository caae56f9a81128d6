// Port of the classic fdlibm `nextafterf`, restricted to binary32.

// Exponent field all 1s, the encoding of +Inf. A stepped encoding that lands
// here has overflowed the finite range.
const F32_EXP_MASK: u32 = 0x7f80_0000;

const F32_SMALLEST_SUBNORMAL: f32 = f32::from_bits(0x0000_0001);

/// Returns the next representable single-precision value after `x` in the
/// direction of `y`.
///
/// No other `f32` lies strictly between `x` and the result on the side of
/// travel. Stepping off the largest finite magnitude saturates to infinity of
/// the same sign, and stepping off zero produces the smallest subnormal with
/// the sign of the direction of travel.
///
/// If either argument is `NaN`, returns `NaN`.
///
/// # Examples
///
/// ```
/// use nextafter_f32::next_after_f32;
/// let ulp_above_one = next_after_f32(1.0, 2.0);
/// assert_eq!(ulp_above_one.to_bits(), 1.0_f32.to_bits() + 1);
/// assert_eq!(next_after_f32(f32::MAX, f32::INFINITY), f32::INFINITY);
/// ```
#[must_use]
pub fn next_after_f32(x: f32, y: f32) -> f32 {
    if x.is_nan() || y.is_nan() {
        return f32::NAN;
    }

    // Return `y`, not `x`, so that the sign of a returned zero follows the
    // target: next_after_f32(-0.0, 0.0) == +0.0 and vice versa.
    if x == y {
        return y;
    }

    if x == 0.0 {
        return if y < 0.0 {
            -F32_SMALLEST_SUBNORMAL
        } else {
            F32_SMALLEST_SUBNORMAL
        };
    }

    // The unsigned encoding is monotonic in magnitude for each sign, so a one
    // ulp step is a single increment or decrement of the bit pattern.
    // Increment when moving away from zero, decrement when moving toward it.
    // This walks across the subnormal/normal boundary without a special case.
    let w = if (y > x) == (x > 0.0) {
        x.to_bits() + 1
    } else {
        x.to_bits() - 1
    };

    // An exponent of all 1s means the step overflowed. Doubling `x` produces
    // the infinity of the correct sign through ordinary rounding.
    if w & F32_EXP_MASK == F32_EXP_MASK {
        return x + x;
    }

    // A stepped exponent field of all 0s means the result is subnormal or
    // zero. fdlibm raises the underflow flag here; IEEE exception flags are
    // not observable from Rust, and the returned value is the same either
    // way.

    f32::from_bits(w)
}
