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

//! vincenty-wgs84
//!
//! A library for solving the inverse geodesic problem on the
//! [WGS-84](https://earth-info.nga.mil/php/download.php?file=coord-wgs84)
//! ellipsoid using Vincenty's iterative formulae, together with a small set
//! of related geodetic and numeric utilities.
//!
//! ## Geodesic navigation
//!
//! The shortest path between two points on the surface of an ellipsoid is a
//! [geodesic](https://en.wikipedia.org/wiki/Geodesics_on_an_ellipsoid).
//!
//! T. Vincenty's
//! [inverse method](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf)
//! maps the geodesic onto a great circle arc on an auxiliary sphere and
//! iterates on the longitude difference of that arc until it converges.
//! It calculates:
//!
//! - the length of the geodesic between two positions in metres;
//! - the azimuth at the start position towards the finish position;
//! - and the azimuth at the finish position back towards the start position.
//!
//! The method is accurate to within a millimetre on the Earth ellipsoid, but
//! it converges slowly, or not at all, for nearly antipodal positions.
//! A failure to converge is reported as a value, see `GeodesicResult`.
//!
//! ## Other calculations
//!
//! - `great_circle::distance` - the great circle distance on a sphere;
//! - `utm::project` - a Universal Transverse Mercator projection;
//! - `jenks::jenks_breaks` - Jenks natural breaks classification of a dataset.
//!
//! ## Design
//!
//! The `Ellipsoid` class represents an ellipsoid of revolution, or a sphere.
//! The constant `WGS84_ELLIPSOID` represents the WGS-84 `Ellipsoid`.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians`;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to perform
//!   great-circle calculations;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them;
//! - [thiserror](https://crates.io/crates/thiserror) - to define the error types;
//! - [log](https://crates.io/crates/log) - to report solver progress.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate alloc;
extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod ellipsoid;
pub mod great_circle;
pub mod jenks;
pub mod utm;
pub mod vincenty;

pub use angle_sc::{Angle, Degrees, Radians, Validate};
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use vincenty::{calculate_inverse, GeodesicResult, InverseSolution, SolverConfig};

use thiserror::Error;

/// The reasons that a geodetic calculation can fail.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GeoError {
    /// A latitude or longitude is NaN or infinite.
    #[error("coordinates must be finite numbers")]
    NonNumericInput,
    /// A latitude is outside [-90, 90] degrees.
    #[error("latitude out of range [-90, 90] degrees: {value}")]
    InvalidLatitude { value: f64 },
    /// A longitude is outside [-180, 180] degrees.
    #[error("longitude out of range [-180, 180] degrees: {value}")]
    InvalidLongitude { value: f64 },
    /// The iteration limit was reached before `lambda` converged.
    #[error("vincenty inverse formula did not converge in {iterations} iterations")]
    DidNotConverge { iterations: u32 },
    /// A sphere radius is zero or negative.
    #[error("sphere radius must be positive, got {value}")]
    InvalidRadius { value: f64 },
}

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,

    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// One minus the flattening ratio.
    one_minus_f: f64,
    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,
    /// The square of the second Eccentricity of the ellipsoid.
    ep_2: f64,
}

impl Ellipsoid {
    /// Constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    #[must_use]
    pub const fn new(a: Metres, f: f64) -> Self {
        Self {
            a,
            f,
            b: ellipsoid::calculate_minor_axis(a, f),
            one_minus_f: 1.0 - f,
            e_2: ellipsoid::calculate_sq_eccentricity(f),
            ep_2: ellipsoid::calculate_sq_2nd_eccentricity(f),
        }
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    #[must_use]
    pub const fn wgs84() -> Self {
        Self::new(ellipsoid::wgs84::A, ellipsoid::wgs84::F)
    }

    /// Construct a sphere, an `Ellipsoid` without flattening.
    /// * `radius` - the radius of the sphere.
    #[must_use]
    pub const fn sphere(radius: Metres) -> Self {
        Self::new(radius, 0.0)
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// One minus the flattening ratio.
    #[must_use]
    pub const fn one_minus_f(&self) -> f64 {
        self.one_minus_f
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    /// The IUGG mean radius of the ellipsoid.
    #[must_use]
    pub const fn mean_radius(&self) -> Metres {
        ellipsoid::calculate_mean_radius(self.a, self.f)
    }

    /// Convert a geodetic latitude to a reduced latitude on the auxiliary
    /// sphere.
    /// * `lat` - the geodetic latitude.
    #[must_use]
    pub fn calculate_reduced_latitude(&self, lat: Angle) -> Angle {
        ellipsoid::calculate_reduced_latitude(lat, self.one_minus_f)
    }
}

/// The WGS-84 `Ellipsoid`.
pub const WGS84_ELLIPSOID: Ellipsoid = Ellipsoid::wgs84();

/// A geographic position: a geodetic latitude and longitude in degrees.
///
/// A `GeographicPoint` is not validated on construction, every calculation
/// validates its positions before using them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeographicPoint {
    lat: Degrees,
    lon: Degrees,
}

impl GeographicPoint {
    /// Constructor.
    /// * `lat` - the latitude, valid in [-90, 90] degrees.
    /// * `lon` - the longitude, valid in [-180, 180] degrees.
    #[must_use]
    pub const fn new(lat: Degrees, lon: Degrees) -> Self {
        Self { lat, lon }
    }

    /// The latitude.
    #[must_use]
    pub const fn lat(&self) -> Degrees {
        self.lat
    }

    /// The longitude.
    #[must_use]
    pub const fn lon(&self) -> Degrees {
        self.lon
    }

    /// Test that the point is a valid geographic position.
    ///
    /// # Errors
    ///
    /// `NonNumericInput`, `InvalidLatitude` or `InvalidLongitude`, checked
    /// in that order.
    pub fn validate(&self) -> Result<(), GeoError> {
        validate_points(&[*self])
    }
}

impl Validate for GeographicPoint {
    /// Test whether a `GeographicPoint` is valid.
    /// Whether -90° <= `lat` <= 90° and -180° <= `lon` <= 180°.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Validate a set of positions: first that every coordinate is a finite
/// number, then every latitude, then every longitude.
pub(crate) fn validate_points(points: &[GeographicPoint]) -> Result<(), GeoError> {
    if points
        .iter()
        .any(|p| !p.lat.0.is_finite() || !p.lon.0.is_finite())
    {
        return Err(GeoError::NonNumericInput);
    }
    if let Some(p) = points.iter().find(|p| !(-90.0..=90.0).contains(&p.lat.0)) {
        return Err(GeoError::InvalidLatitude { value: p.lat.0 });
    }
    if let Some(p) = points.iter().find(|p| !(-180.0..=180.0).contains(&p.lon.0)) {
        return Err(GeoError::InvalidLongitude { value: p.lon.0 });
    }
    Ok(())
}

/// Calculate the length of the geodesic between a pair of positions on the
/// WGS-84 ellipsoid using the default `SolverConfig`.
/// * `a`, `b` - the start and finish positions.
///
/// returns the geodesic length in metres, zero for identical positions.
///
/// # Errors
///
/// Invalid positions, or `DidNotConverge` for some nearly antipodal positions.
///
/// # Examples
/// ```
/// use vincenty_wgs84::*;
///
/// let istanbul = GeographicPoint::new(Degrees(42.0), Degrees(29.0));
/// let washington = GeographicPoint::new(Degrees(39.0), Degrees(-77.0));
/// let length = calculate_geodesic_length(&istanbul, &washington).unwrap();
///
/// let distance_nm = NauticalMiles::from(length);
/// println!("Istanbul-Washington distance: {:?}", distance_nm);
/// assert!((length.0 - 8_339_863.136).abs() < 1e-3);
/// ```
pub fn calculate_geodesic_length(
    a: &GeographicPoint,
    b: &GeographicPoint,
) -> Result<Metres, GeoError> {
    let result = calculate_inverse(a, b, &WGS84_ELLIPSOID, &SolverConfig::default());
    Ok(result
        .into_result()?
        .map_or(Metres(0.0), |solution| solution.distance()))
}
