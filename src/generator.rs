use log::debug;
use rayon::prelude::*;

use crate::error::{FieldError, Result};
use crate::field::{ESCAPED, Field};
use crate::math::C;

/// Classify every point of a `width` x `height` grid over
/// `[real_low, real_high] x [imag_low, imag_high]` as bounded or escaped
/// under z <- z^2 + c.
///
/// Both axes are sampled with inclusive endpoints; a one-sample axis sits
/// at its low bound. The returned field is row-major with row 0 at
/// `imag_low`. Orbits run in f32 and stop at the first iteration whose
/// magnitude exceeds `upper_bound`, so raising `max_iters` can only move
/// cells from bounded to escaped.
///
/// Rows are computed in parallel, but each cell depends only on its own
/// coordinate, so the result is bit-identical to a sequential pass and the
/// call returns only once the whole field is filled.
pub fn generate(
    width: usize,
    height: usize,
    real_low: f64,
    real_high: f64,
    imag_low: f64,
    imag_high: f64,
    max_iters: u32,
    upper_bound: f64,
) -> Result<Field> {
    validate(
        width, height, real_low, real_high, imag_low, imag_high, upper_bound,
    )?;
    debug!("generating {width}x{height} field, {max_iters} iteration cap");

    let real_vals = linspace(real_low, real_high, width);
    let imag_vals = linspace(imag_low, imag_high, height);
    let bound_sq = (upper_bound * upper_bound) as f32;

    let mut field = Field::bounded(width, height);
    field
        .cells_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let im = imag_vals[y] as f32;
            for (x, cell) in row.iter_mut().enumerate() {
                let c = C::new(real_vals[x] as f32, im);
                if escapes(c, max_iters, bound_sq) {
                    *cell = ESCAPED;
                }
            }
        });

    Ok(field)
}

fn validate(
    width: usize,
    height: usize,
    real_low: f64,
    real_high: f64,
    imag_low: f64,
    imag_high: f64,
    upper_bound: f64,
) -> Result<()> {
    if width == 0 {
        return Err(FieldError::invalid("width", "must be at least 1"));
    }
    if height == 0 {
        return Err(FieldError::invalid("height", "must be at least 1"));
    }
    if !(upper_bound > 0.0 && upper_bound.is_finite()) {
        return Err(FieldError::invalid(
            "upper_bound",
            format!("must be positive and finite, got {upper_bound}"),
        ));
    }
    // `!(a <= b)` also rejects NaN bounds.
    if !(real_low <= real_high) {
        return Err(FieldError::invalid(
            "real_low",
            format!("must not exceed real_high ({real_low} > {real_high})"),
        ));
    }
    if !(imag_low <= imag_high) {
        return Err(FieldError::invalid(
            "imag_low",
            format!("must not exceed imag_high ({imag_low} > {imag_high})"),
        ));
    }
    Ok(())
}

/// `n` evenly spaced samples over `[low, high]`, endpoints included.
fn linspace(low: f64, high: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![low];
    }
    let step = (high - low) / (n - 1) as f64;
    let mut vals: Vec<f64> = (0..n).map(|i| low + i as f64 * step).collect();
    // Pin the last sample to the bound exactly, as the accumulated step
    // can land an ulp off.
    vals[n - 1] = high;
    vals
}

/// One orbit: update first, then test. The first crossing of the
/// threshold ends the point.
fn escapes(c: C, max_iters: u32, bound_sq: f32) -> bool {
    let mut z = C::new(0.0, 0.0);
    for _ in 0..max_iters {
        z = z.mul(z).add(c);
        if z.abs_sq() > bound_sq {
            return true;
        }
    }
    false
}
