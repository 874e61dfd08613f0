// kernel.rs - Convolution kernels and the functions they are built from

use crate::matrix::Matrix;

/// Gaussian bump of the given `height`.
pub fn gauss(x: f64, height: f64, center: f64, standard_deviation: f64) -> f64 {
    height * (-((x - center) / standard_deviation).powi(2) / 2.0).exp()
}

/// Gaussian bump peaking at 1.
pub fn normal_gauss(x: f64, center: f64, standard_deviation: f64) -> f64 {
    gauss(x, 1.0, center, standard_deviation)
}

/// Euclidean distance between two points.
pub fn distance(p1: (f64, f64), p2: (f64, f64)) -> f64 {
    ((p2.0 - p1.0).powi(2) + (p2.1 - p1.1).powi(2)).sqrt()
}

/// A `(2r + 1)` square whose cells hold their distance from the centre,
/// divided by `radius`.
pub fn distance_kernel(radius: usize) -> Matrix<f64> {
    let diameter = radius * 2 + 1;
    let center = radius as f64;
    Matrix::from_function(diameter, diameter, |x, y| {
        distance((x as f64, y as f64), (center, center)) / radius as f64
    })
}

/// Ring-shaped kernel: a Gaussian of the normalised distance, centre cell
/// excluded, scaled so its weights sum to 1.
pub fn gaussian_kernel(radius: usize, mean: f64, standard_deviation: f64) -> Matrix<f64> {
    let mut kernel = distance_kernel(radius);

    kernel.map(|&d| {
        if d == 0.0 || d > 1.0 {
            0.0
        } else {
            normal_gauss(d, mean, standard_deviation)
        }
    });

    let sum: f64 = kernel.iter().sum();
    if sum > 0.0 {
        kernel.map(|v| v / sum);
    }
    kernel
}

/// Weighted sum of the neighbourhood of `(x, y)`, the kernel centred on the
/// cell and wrapping around the field's edges.
pub fn convolve_at(field: &Matrix<f64>, kernel: &Matrix<f64>, x: usize, y: usize) -> f64 {
    let rx = (kernel.width() / 2) as isize;
    let ry = (kernel.height() / 2) as isize;
    let mut total = 0.0;
    for ky in 0..kernel.height() {
        for kx in 0..kernel.width() {
            let weight = kernel.get(kx, ky);
            if weight == 0.0 {
                continue;
            }
            total += weight * field.get_wrapped(x, y, kx as isize - rx, ky as isize - ry);
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        assert_eq!(distance((0.0, 0.0), (0.0, 0.0)), 0.0);
        assert_eq!(distance((0.0, 0.0), (1.0, 0.0)), 1.0);
        assert_eq!(distance((0.0, 0.0), (1.0, 1.0)), 2.0_f64.sqrt());
    }

    #[test]
    fn distance_kernel_of_radius_one() {
        let s = 2.0_f64.sqrt();
        let expected = Matrix::from_rows(vec![
            vec![s, 1.0, s],
            vec![1.0, 0.0, 1.0],
            vec![s, 1.0, s],
        ])
        .unwrap();
        assert_eq!(distance_kernel(1), expected);
    }

    #[test]
    fn gaussian_kernel_is_normalised_ring() {
        let kernel = gaussian_kernel(5, 0.5, 0.15);
        let sum: f64 = kernel.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert_eq!(kernel.get(5, 5), 0.0, "centre is excluded");
        // Mid-ring weighs more than the rim.
        assert!(kernel.get(5, 2) > kernel.get(5, 0));
        // Corners are beyond the radius.
        assert_eq!(kernel.get(0, 0), 0.0);
    }

    #[test]
    fn convolution_of_a_constant_field() {
        let field = Matrix::from_constant(8, 8, 0.5);
        let kernel = gaussian_kernel(3, 0.5, 0.15);
        let u = convolve_at(&field, &kernel, 0, 0);
        assert!((u - 0.5).abs() < 1e-9);
    }

    #[test]
    fn convolution_is_centred() {
        let mut field = Matrix::from_constant(5, 5, 0.0);
        field.set(1, 2, 1.0);
        let kernel = Matrix::from_rows(vec![
            vec![0.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ])
        .unwrap();
        // The left neighbour of (2, 2) is (1, 2).
        assert_eq!(convolve_at(&field, &kernel, 2, 2), 1.0);
        assert_eq!(convolve_at(&field, &kernel, 1, 2), 0.0);
    }
}
