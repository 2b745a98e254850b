//! Round-trip normalization
//!
//! An unnormalized inverse transform returns the original signal scaled by
//! N. Scaling every element by 1/N undoes that.

use super::sample::{Sample, SpectralFloat};
use num_traits::One;

/// Scale every element of `buffer` by `1/N`, N being the buffer length
///
/// Works for real and complex samples of either precision. An empty buffer
/// is left untouched.
pub fn scale_in_place<S: Sample>(buffer: &mut [S]) {
    if buffer.is_empty() {
        return;
    }

    let scale = <S::Real as One>::one() / <S::Real as SpectralFloat>::from_usize(buffer.len());
    log::trace!("scale_in_place: n={}, scale={:?}", buffer.len(), scale);

    for x in buffer.iter_mut() {
        *x = x.scale(scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;
    use realfft::RealFftPlanner;
    use rustfft::FftPlanner;
    use std::f64::consts::PI;

    #[test]
    fn test_empty_buffer_is_noop() {
        let mut real: Vec<f32> = Vec::new();
        scale_in_place(&mut real);
        assert!(real.is_empty());

        let mut complex: Vec<Complex<f64>> = Vec::new();
        scale_in_place(&mut complex);
        assert!(complex.is_empty());
    }

    #[test]
    fn test_uniform_scale() {
        let mut buffer = vec![4.0f64; 4];
        scale_in_place(&mut buffer);
        assert_eq!(buffer, vec![1.0; 4]);

        let mut buffer = vec![Complex::new(2.0f32, -6.0); 2];
        scale_in_place(&mut buffer);
        assert_eq!(buffer, vec![Complex::new(1.0, -3.0); 2]);
    }

    fn normalize_constant<S: Sample + PartialEq>(value: S, expected: S, n: usize) {
        let mut buffer = vec![value; n];
        scale_in_place(&mut buffer);
        assert!(buffer.iter().all(|&x| x == expected), "n = {}: {:?}", n, buffer);
    }

    #[test]
    fn test_all_element_types() {
        normalize_constant(8.0f32, 1.0, 8);
        normalize_constant(-8.0f64, -2.0, 4);
        normalize_constant(Complex::new(4.0f32, 2.0), Complex::new(1.0, 0.5), 4);
        normalize_constant(Complex::new(-2.0f64, 10.0), Complex::new(-1.0, 5.0), 2);
    }

    #[test]
    fn test_dc_and_nyquist_scaled_too() {
        let mut buffer = vec![Complex::new(8.0f64, 0.0); 8];
        scale_in_place(&mut buffer);

        assert_eq!(buffer[0], Complex::new(1.0, 0.0));
        assert_eq!(buffer[4], Complex::new(1.0, 0.0));
    }

    #[test]
    fn test_complex_round_trip_f32() {
        let n = 1024;
        let original = vec![Complex::new(1.0f32, 0.0); n];
        let mut buffer = original.clone();

        let mut planner = FftPlanner::<f32>::new();
        planner.plan_fft_forward(n).process(&mut buffer);
        planner.plan_fft_inverse(n).process(&mut buffer);

        // Unnormalized round trip is off by a factor of N
        assert!((buffer[0].re - n as f32).abs() < 1e-2);

        scale_in_place(&mut buffer);

        for (i, (x, y)) in buffer.iter().zip(original.iter()).enumerate() {
            let err = (x - y).norm() / y.norm();
            assert!(err < 1e-5, "Mismatch at {}: {:?} vs {:?}", i, x, y);
        }
    }

    #[test]
    fn test_complex_round_trip_f64() {
        let n = 500;
        let original: Vec<Complex<f64>> = (0..n)
            .map(|i| {
                let t = i as f64 / n as f64;
                Complex::new((2.0 * PI * 7.0 * t).sin(), 0.5 * (2.0 * PI * 3.0 * t).cos())
            })
            .collect();
        let mut buffer = original.clone();

        let mut planner = FftPlanner::<f64>::new();
        planner.plan_fft_forward(n).process(&mut buffer);
        planner.plan_fft_inverse(n).process(&mut buffer);
        scale_in_place(&mut buffer);

        for (i, (x, y)) in buffer.iter().zip(original.iter()).enumerate() {
            assert!((x - y).norm() < 1e-10, "Mismatch at {}: {:?} vs {:?}", i, x, y);
        }
    }

    #[test]
    fn test_real_round_trip_f64() {
        let n = 256;
        let original: Vec<f64> = (0..n)
            .map(|i| 1.0 + (2.0 * PI * 5.0 * i as f64 / n as f64).sin())
            .collect();

        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(n);
        let c2r = planner.plan_fft_inverse(n);

        let mut input = original.clone();
        let mut spectrum = r2c.make_output_vec();
        r2c.process(&mut input, &mut spectrum).unwrap();

        // Inverse real transform requires purely real DC and Nyquist bins
        let last = spectrum.len() - 1;
        spectrum[0].im = 0.0;
        spectrum[last].im = 0.0;

        let mut output = c2r.make_output_vec();
        c2r.process(&mut spectrum, &mut output).unwrap();
        scale_in_place(&mut output);

        for (i, (x, y)) in output.iter().zip(original.iter()).enumerate() {
            assert!((x - y).abs() < 1e-10, "Mismatch at {}: {} vs {}", i, x, y);
        }
    }

    #[test]
    fn test_real_round_trip_f32() {
        let n = 256;
        let original: Vec<f32> = (0..n)
            .map(|i| 1.0 + 0.5 * (2.0 * std::f32::consts::PI * 9.0 * i as f32 / n as f32).sin())
            .collect();

        let mut planner = RealFftPlanner::<f32>::new();
        let r2c = planner.plan_fft_forward(n);
        let c2r = planner.plan_fft_inverse(n);

        let mut input = original.clone();
        let mut spectrum = r2c.make_output_vec();
        r2c.process(&mut input, &mut spectrum).unwrap();

        let last = spectrum.len() - 1;
        spectrum[0].im = 0.0;
        spectrum[last].im = 0.0;

        let mut output = c2r.make_output_vec();
        c2r.process(&mut spectrum, &mut output).unwrap();
        scale_in_place(&mut output);

        for (i, (x, y)) in output.iter().zip(original.iter()).enumerate() {
            let err = (x - y).abs() / y.abs();
            assert!(err < 1e-5, "Mismatch at {}: {} vs {}", i, x, y);
        }
    }
}
