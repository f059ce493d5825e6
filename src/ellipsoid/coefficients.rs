// Copyright (c) 2024 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! This module contains the series coefficients used on the surface of an
//! ellipsoid.
//!
//! It uses the equations given by T. Vincenty in
//! [Direct and Inverse Solutions of Geodesics on the Ellipsoid with application of nested equations](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf)
//! and the meridian arc series given by J. P. Snyder in
//! [Map Projections: A Working Manual](https://pubs.usgs.gov/publication/pp1395),
//! Eq. 3-21.

/// The coefficients of the polynomial in `u²` inside Vincenty's `A`, Eq. 3.
const VINCENTY_A: [f64; 4] = [4096.0, -768.0, 320.0, -175.0];

/// The coefficients of the polynomial in `u²` inside Vincenty's `B`, Eq. 4.
const VINCENTY_B: [f64; 4] = [256.0, -128.0, 74.0, -47.0];

/// Evaluate the polynomial in x using
/// [Horner's method](https://en.wikipedia.org/wiki/Horner%27s_method).
/// * `coeffs` - the polynomial coefficients, lowest order first.
/// * `x` - the variable.
/// # Examples
/// ```
/// use vincenty_wgs84::ellipsoid::coefficients::evaluate_polynomial;
///
/// // 1 + 2x + 3x^2 at x = 2
/// assert_eq!(17.0, evaluate_polynomial(&[1.0, 2.0, 3.0], 2.0));
/// ```
#[must_use]
pub fn evaluate_polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs.split_last().map_or(0.0, |(last, elements)| {
        elements
            .iter()
            .rev()
            .fold(*last, |result, element| result * x + element)
    })
}

/// Calculate `u²`, the variable of Vincenty's distance series.
/// * `cos_sq_alpha` - the square of the cosine of the azimuth at the Equator.
/// * `ep_2` - the square of the second Eccentricity: `(a² - b²) / b²`.
#[must_use]
pub fn calculate_u_sq(cos_sq_alpha: f64, ep_2: f64) -> f64 {
    cos_sq_alpha * ep_2
}

/// Vincenty's `A` coefficient, Eq. 3.
/// * `u_sq` - see `calculate_u_sq`.
/// # Examples
/// ```
/// use vincenty_wgs84::ellipsoid::coefficients::evaluate_vincenty_a;
///
/// assert_eq!(1.0, evaluate_vincenty_a(0.0));
/// ```
#[must_use]
pub fn evaluate_vincenty_a(u_sq: f64) -> f64 {
    1.0 + u_sq / 16384.0 * evaluate_polynomial(&VINCENTY_A, u_sq)
}

/// Vincenty's `B` coefficient, Eq. 4.
/// * `u_sq` - see `calculate_u_sq`.
#[must_use]
pub fn evaluate_vincenty_b(u_sq: f64) -> f64 {
    u_sq / 1024.0 * evaluate_polynomial(&VINCENTY_B, u_sq)
}

/// Vincenty's `C` coefficient, Eq. 10.
/// * `f` - the flattening of the ellipsoid.
/// * `cos_sq_alpha` - the square of the cosine of the azimuth at the Equator.
#[must_use]
pub fn evaluate_vincenty_c(f: f64, cos_sq_alpha: f64) -> f64 {
    f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha))
}

/// The coefficients of the meridian arc series, Snyder Eq. 3-21.
/// * `e_2` - the square of the Eccentricity of the ellipsoid.
#[must_use]
pub fn evaluate_meridian_arc_coeffs(e_2: f64) -> [f64; 4] {
    let e_4 = e_2 * e_2;
    let e_6 = e_4 * e_2;
    [
        1.0 - e_2 / 4.0 - 3.0 * e_4 / 64.0 - 5.0 * e_6 / 256.0,
        3.0 * e_2 / 8.0 + 3.0 * e_4 / 32.0 + 45.0 * e_6 / 1024.0,
        15.0 * e_4 / 256.0 + 45.0 * e_6 / 1024.0,
        35.0 * e_6 / 3072.0,
    ]
}

/// The length of the meridian arc from the Equator to a latitude, in units
/// of the Semimajor axis.
/// * `coeffs` - the meridian arc coefficients.
/// * `phi` - the geodetic latitude in radians.
#[must_use]
pub fn calculate_meridian_arc(coeffs: &[f64; 4], phi: f64) -> f64 {
    coeffs[0] * phi - coeffs[1] * libm::sin(2.0 * phi) + coeffs[2] * libm::sin(4.0 * phi)
        - coeffs[3] * libm::sin(6.0 * phi)
}
