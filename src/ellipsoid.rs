// Copyright (c) 2024-2025 Ken Barker

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

//! The ellipsoid module contains types and functions for defining an ellipsoid
//! given its Semimajor axis (the equivalent of its radius) and flattening ratio.

#![allow(clippy::suboptimal_flops)]

pub mod coefficients;
pub mod wgs84;

use crate::{Angle, Metres};

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use vincenty_wgs84::Metres;
/// use vincenty_wgs84::ellipsoid::{calculate_minor_axis, wgs84};
///
/// // The WGS 84 Semiminor axis measured in metres.
/// let b : Metres = Metres(6_356_752.314_245_179);
/// assert_eq!(b, calculate_minor_axis(wgs84::A, wgs84::F));
/// ```
#[must_use]
pub const fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use vincenty_wgs84::ellipsoid::{calculate_sq_eccentricity, wgs84};
///
/// // The WGS 84 sq_eccentricity.
/// assert_eq!(0.0066943799901413165, calculate_sq_eccentricity(wgs84::F));
/// ```
#[must_use]
pub const fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the square of the second Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use vincenty_wgs84::ellipsoid::{calculate_sq_2nd_eccentricity, wgs84};
///
/// // The WGS 84 sq 2nd eccentricity.
/// assert_eq!(0.006739496742276434, calculate_sq_2nd_eccentricity(wgs84::F));
/// ```
#[must_use]
pub const fn calculate_sq_2nd_eccentricity(f: f64) -> f64 {
    let one_minus_f = 1.0 - f;
    calculate_sq_eccentricity(f) / (one_minus_f * one_minus_f)
}

/// Calculate the IUGG mean radius of an ellipsoid: `(2a + b) / 3`.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use vincenty_wgs84::ellipsoid::{calculate_mean_radius, wgs84};
///
/// let r = calculate_mean_radius(wgs84::A, wgs84::F);
/// assert!((r.0 - 6_371_008.771_415).abs() < 1e-3);
/// ```
#[must_use]
pub const fn calculate_mean_radius(a: Metres, f: f64) -> Metres {
    Metres((2.0 * a.0 + calculate_minor_axis(a, f).0) / 3.0)
}

/// Convert a geodetic latitude to a reduced latitude on the auxiliary
/// sphere: `tan(U) = (1 - f) * tan(lat)`.
///
/// The result keeps the exact sine and cosine of `lat`, so the poles map
/// onto the poles with a cosine of zero.
/// * `lat` - the geodetic latitude.
/// * `one_minus_f` - one minus the flattening ratio.
/// # Examples
/// ```
/// use vincenty_wgs84::Angle;
/// use vincenty_wgs84::Degrees;
/// use vincenty_wgs84::ellipsoid::{calculate_reduced_latitude, wgs84};
///
/// let north_pole = calculate_reduced_latitude(Angle::from(Degrees(90.0)), 1.0 - wgs84::F);
/// assert_eq!(1.0, north_pole.sin().0);
/// assert_eq!(0.0, north_pole.cos().0);
/// ```
#[must_use]
pub fn calculate_reduced_latitude(lat: Angle, one_minus_f: f64) -> Angle {
    Angle::from_y_x(one_minus_f * lat.sin().0, lat.cos().0)
}
