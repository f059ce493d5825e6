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

//! The `great_circle` module calculates distances on the surface of a
//! sphere.
//!
//! It uses the robust `atan2` formula of the central angle from
//! [unit-sphere](https://crates.io/crates/unit-sphere), scaled by the radius
//! of the sphere.

use crate::{ellipsoid, validate_points, Angle, Degrees, GeoError, GeographicPoint, Metres};

/// Calculate the great circle distance between a pair of positions on a
/// sphere.
/// * `p1`, `p2` - the positions, validated as for `calculate_inverse`.
/// * `radius` - the radius of the sphere.
///
/// # Errors
///
/// `NonNumericInput`, `InvalidLatitude` or `InvalidLongitude` for an invalid
/// position; `NonNumericInput` or `InvalidRadius` unless the radius is a
/// finite positive number.
///
/// # Examples
/// ```
/// use vincenty_wgs84::{great_circle, Degrees, GeographicPoint, Metres};
///
/// let a = GeographicPoint::new(Degrees(0.0), Degrees(0.0));
/// let b = GeographicPoint::new(Degrees(0.0), Degrees(90.0));
/// let d = great_circle::distance(&a, &b, Metres(6_371_000.0)).unwrap();
/// assert!((d.0 - 10_007_543.398).abs() < 1e-3);
/// ```
pub fn distance(
    p1: &GeographicPoint,
    p2: &GeographicPoint,
    radius: Metres,
) -> Result<Metres, GeoError> {
    validate_points(&[*p1, *p2])?;
    if !radius.0.is_finite() {
        return Err(GeoError::NonNumericInput);
    }
    if radius.0 <= 0.0 {
        return Err(GeoError::InvalidRadius { value: radius.0 });
    }

    let lat1 = Angle::from(p1.lat());
    let lat2 = Angle::from(p2.lat());
    let delta_long = Angle::from(Degrees(p2.lon().0 - p1.lon().0));
    let central_angle = unit_sphere::great_circle::calculate_gc_distance(lat1, lat2, delta_long);
    Ok(Metres(radius.0 * central_angle.0))
}

/// Calculate the great circle distance between a pair of positions on a
/// sphere with the WGS-84 mean radius.
///
/// # Errors
///
/// As for `distance`.
pub fn wgs84_distance(p1: &GeographicPoint, p2: &GeographicPoint) -> Result<Metres, GeoError> {
    distance(p1, p2, ellipsoid::wgs84::MEAN_RADIUS)
}
