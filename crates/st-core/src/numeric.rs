use crate::{CoreError, CoreResult};

/// Floating point type used throughout system
pub type Real = f64;

/// Smallest and largest value of a series.
pub fn span(values: &[Real], what: &'static str) -> CoreResult<(Real, Real)> {
    let mut iter = values.iter().copied();
    let first = iter.next().ok_or(CoreError::EmptySeries { what })?;
    Ok(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

/// `count` evenly spaced points over `[start, end]`, both ends included.
///
/// A single point yields `start`; `start == end` yields `count` copies.
pub fn linspace(start: Real, end: Real, count: usize) -> CoreResult<Vec<Real>> {
    if count == 0 {
        return Err(CoreError::InvalidArg {
            what: "linspace needs at least one point",
        });
    }
    if count == 1 {
        return Ok(vec![start]);
    }

    let delta = (end - start) / (count - 1) as Real;
    let mut points: Vec<Real> = (0..count).map(|i| start + i as Real * delta).collect();

    // Ensure exact endpoint
    points[count - 1] = end;
    Ok(points)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn linspace_is_monotone_and_bounded(
            start in -1000.0_f64..1000.0,
            width in 0.0_f64..1000.0,
            count in 2_usize..200,
        ) {
            let end = start + width;
            let points = linspace(start, end, count).unwrap();
            prop_assert_eq!(points.len(), count);
            prop_assert_eq!(points[0], start);
            prop_assert_eq!(points[count - 1], end);
            for pair in points.windows(2) {
                prop_assert!(pair[1] >= pair[0] - 1e-9);
            }
        }
    }
}
