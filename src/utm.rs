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

//! The `utm` module projects geodetic positions onto the
//! [Universal Transverse Mercator](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
//! grid.
//!
//! It evaluates the transverse Mercator series of J. P. Snyder,
//! [Map Projections: A Working Manual](https://pubs.usgs.gov/publication/pp1395),
//! Eqs. 8-9 to 8-13, which are accurate to better than a millimetre within
//! a UTM zone.
//!
//! Latitude bands and the Norway and Svalbard zone exceptions are not
//! modelled: the zone depends upon the longitude alone.

#![allow(clippy::suboptimal_flops)]

use crate::ellipsoid::coefficients::{calculate_meridian_arc, evaluate_meridian_arc_coeffs};
use crate::{validate_points, Ellipsoid, GeoError, GeographicPoint, Metres};

/// The scale factor along the central meridian of a zone.
pub const K0: f64 = 0.9996;

/// The easting of the central meridian of a zone.
pub const FALSE_EASTING: Metres = Metres(500_000.0);

/// The northing of the Equator in the southern hemisphere.
pub const FALSE_NORTHING_SOUTH: Metres = Metres(10_000_000.0);

/// The number of UTM zones.
pub const NUMBER_OF_ZONES: u8 = 60;

/// The hemisphere of a UTM coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// The hemisphere letter: 'N' or 'S'.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
        }
    }
}

impl From<Hemisphere> for char {
    fn from(hemisphere: Hemisphere) -> Self {
        hemisphere.as_char()
    }
}

/// A position on the UTM grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UtmCoordinate {
    easting: Metres,
    northing: Metres,
    zone: u8,
    hemisphere: Hemisphere,
}

impl UtmCoordinate {
    /// The easting, including the false easting.
    #[must_use]
    pub const fn easting(&self) -> Metres {
        self.easting
    }

    /// The northing, including the false northing in the southern hemisphere.
    #[must_use]
    pub const fn northing(&self) -> Metres {
        self.northing
    }

    /// The zone number, 1 to 60.
    #[must_use]
    pub const fn zone(&self) -> u8 {
        self.zone
    }

    /// The hemisphere.
    #[must_use]
    pub const fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }
}

/// Calculate the UTM zone of a longitude in degrees.
/// The zone of the antimeridian at 180° is 60.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn calculate_zone(lon: f64) -> u8 {
    let zone = 1.0 + libm::floor((lon + 180.0) / 6.0);
    (zone as u8).clamp(1, NUMBER_OF_ZONES)
}

/// Calculate the longitude of the central meridian of a zone in degrees.
#[must_use]
pub fn calculate_central_meridian(zone: u8) -> f64 {
    6.0 * f64::from(zone) - 183.0
}

/// Project a geodetic position onto the UTM grid.
/// * `point` - the position, validated as for `calculate_inverse`.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// # Errors
///
/// `NonNumericInput`, `InvalidLatitude` or `InvalidLongitude`.
///
/// # Examples
/// ```
/// use vincenty_wgs84::{utm, Degrees, GeographicPoint, WGS84_ELLIPSOID};
///
/// let cn_tower = GeographicPoint::new(Degrees(43.642567), Degrees(-79.387139));
/// let coord = utm::project(&cn_tower, &WGS84_ELLIPSOID).unwrap();
/// assert_eq!(17, coord.zone());
/// assert_eq!('N', coord.hemisphere().as_char());
/// assert!((coord.easting().0 - 630_084.3).abs() < 0.1);
/// assert!((coord.northing().0 - 4_833_438.6).abs() < 0.1);
/// ```
pub fn project(point: &GeographicPoint, ellipsoid: &Ellipsoid) -> Result<UtmCoordinate, GeoError> {
    validate_points(&[*point])?;

    let lat = point.lat().0;
    let lon = point.lon().0;
    let zone = calculate_zone(lon);
    let lon0 = calculate_central_meridian(zone);

    let a = ellipsoid.a().0;
    let e_2 = ellipsoid.e_2();
    let ep_2 = ellipsoid.ep_2();

    let phi = lat.to_radians();
    let sin_phi = libm::sin(phi);
    let cos_phi = libm::cos(phi);
    let tan_phi = libm::tan(phi);

    // Radius of curvature in the prime vertical
    let n = a / libm::sqrt(1.0 - e_2 * sin_phi * sin_phi);
    let t = tan_phi * tan_phi;
    let c = ep_2 * cos_phi * cos_phi;
    let aa = cos_phi * (lon - lon0).to_radians();
    let m = a * calculate_meridian_arc(&evaluate_meridian_arc_coeffs(e_2), phi);

    let aa_2 = aa * aa;
    let aa_3 = aa_2 * aa;
    let aa_4 = aa_3 * aa;
    let aa_5 = aa_4 * aa;
    let aa_6 = aa_5 * aa;

    let easting = K0
        * n
        * (aa + (1.0 - t + c) * aa_3 / 6.0
            + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep_2) * aa_5 / 120.0)
        + FALSE_EASTING.0;
    let mut northing = K0
        * (m + n
            * tan_phi
            * (aa_2 / 2.0
                + (5.0 - t + 9.0 * c + 4.0 * c * c) * aa_4 / 24.0
                + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep_2) * aa_6 / 720.0));

    let hemisphere = if lat < 0.0 {
        northing += FALSE_NORTHING_SOUTH.0;
        Hemisphere::South
    } else {
        Hemisphere::North
    };

    Ok(UtmCoordinate {
        easting: Metres(easting),
        northing: Metres(northing),
        zone,
        hemisphere,
    })
}
