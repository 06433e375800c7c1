//! Small DSP math helpers

/// Convert an amplitude ratio in dB to linear scale
#[inline]
pub fn db_to_linear(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Convert a linear amplitude ratio to dB
#[inline]
pub fn linear_to_db(linear: f64) -> f64 {
    20.0 * linear.log10()
}

/// Arithmetic mean, 0.0 for an empty slice
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Root-mean-square amplitude, 0.0 for an empty slice
pub fn rms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = samples.iter().map(|x| x * x).sum();
    (sum_sq / samples.len() as f64).sqrt()
}

/// Population standard deviation
pub fn std_dev(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let m = mean(samples);
    let var = samples.iter().map(|x| (x - m).powi(2)).sum::<f64>() / samples.len() as f64;
    var.sqrt()
}

/// Minimum and maximum of a slice, `None` if empty or any value is NaN
pub fn min_max(samples: &[f64]) -> Option<(f64, f64)> {
    let mut iter = samples.iter().copied();
    let first = iter.next()?;
    if first.is_nan() {
        return None;
    }
    let mut lo = first;
    let mut hi = first;
    for x in iter {
        if x.is_nan() {
            return None;
        }
        if x < lo {
            lo = x;
        }
        if x > hi {
            hi = x;
        }
    }
    Some((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_conversion() {
        assert!((db_to_linear(0.0) - 1.0).abs() < 1e-10);
        assert!((db_to_linear(20.0) - 10.0).abs() < 1e-10);
        assert!((db_to_linear(-20.0) - 0.1).abs() < 1e-10);
        assert!((linear_to_db(10.0) - 20.0).abs() < 1e-10);
        assert!((linear_to_db(db_to_linear(27.0)) - 27.0).abs() < 1e-10);
    }

    #[test]
    fn test_rms() {
        assert_eq!(rms(&[]), 0.0);
        assert!((rms(&[0.5, -0.5, 0.5, -0.5]) - 0.5).abs() < 1e-12);
        assert!((rms(&[3.0, 4.0]) - (12.5_f64).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_mean_and_std() {
        let x = [1.0, 2.0, 3.0, 4.0];
        assert!((mean(&x) - 2.5).abs() < 1e-12);
        assert!((std_dev(&x) - 1.25_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&[]), None);
        assert_eq!(min_max(&[2.0, -1.0, 5.0]), Some((-1.0, 5.0)));
        assert_eq!(min_max(&[1.0, f64::NAN]), None);
    }
}
