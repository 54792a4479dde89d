use num_traits::Float;
use std::fmt;

/// Spaces reserved around the integer digits of every rendered cell.
pub(crate) const CELL_PADDING: usize = 6;

/// Decimal places used when the formatter does not request a precision.
pub(crate) const DEFAULT_PRECISION: usize = 2;

/// Returns how many digits sit left of the decimal point beyond the first,
/// i.e. the number of times `value` can be divided by ten while staying >= 10.
/// Values below 10 (including all negatives) yield 0, as do NaN and infinities.
pub fn number_len<T: Float + From<u8>>(value: T) -> usize {
    if !value.is_finite() {
        return 0;
    }
    let ten = <T as From<u8>>::from(10);
    let mut value = value;
    let mut len = 0;
    while value >= ten {
        value = value / ten;
        len += 1;
    }
    len
}

/// Column width used for every cell, derived from the field's maximum only.
pub(crate) fn cell_width(max: f64) -> usize {
    number_len(max) + CELL_PADDING
}

/// Writes `values` as right-aligned cells of the given width.
pub(crate) fn write_cells(
    f: &mut fmt::Formatter<'_>,
    values: &[f64],
    width: usize,
    precision: usize,
) -> fmt::Result {
    for val in values {
        write!(f, "{:>width$.precision$}", val, width = width, precision = precision)?;
    }
    Ok(())
}
