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

//! The vincenty module solves the inverse geodesic problem: the length of
//! the geodesic between two positions on an ellipsoid and its azimuths at
//! both ends, using
//! [Vincenty's inverse formula](https://en.wikipedia.org/wiki/Vincenty%27s_formulae#Inverse_problem).
//!
//! The formula iterates on the longitude difference on the auxiliary sphere,
//! `lambda`. It fails to converge for some nearly antipodal positions, e.g.
//! (0°, 0°) and (0.5°, 179.7°) on WGS-84, so callers must expect
//! `GeoError::DidNotConverge` for such queries.

#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

use crate::ellipsoid::coefficients::{
    calculate_u_sq, evaluate_vincenty_a, evaluate_vincenty_b, evaluate_vincenty_c,
};
use crate::{validate_points, Angle, Degrees, Ellipsoid, GeoError, GeographicPoint, Metres, Radians};
use core::f64::consts::{PI, TAU};

/// The default maximum number of iterations.
pub const DEFAULT_ITERATION_LIMIT: u32 = 100;

/// The default convergence tolerance of `lambda`, in Radians.
pub const DEFAULT_TOLERANCE: Radians = Radians(1e-12);

/// The iteration limit and convergence tolerance of the solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    /// The maximum number of iterations, bounding the worst case latency.
    pub iteration_limit: u32,
    /// The maximum change in `lambda` between successive iterations for the
    /// solution to be accepted.
    pub tolerance: Radians,
}

impl SolverConfig {
    /// Constructor.
    /// * `iteration_limit` - the maximum number of iterations.
    /// * `tolerance` - the convergence tolerance of `lambda`.
    #[must_use]
    pub const fn new(iteration_limit: u32, tolerance: Radians) -> Self {
        Self {
            iteration_limit,
            tolerance,
        }
    }

    /// Set the maximum number of iterations.
    #[must_use]
    pub const fn with_iteration_limit(self, iteration_limit: u32) -> Self {
        Self {
            iteration_limit,
            ..self
        }
    }

    /// Set the convergence tolerance.
    #[must_use]
    pub const fn with_tolerance(self, tolerance: Radians) -> Self {
        Self { tolerance, ..self }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATION_LIMIT, DEFAULT_TOLERANCE)
    }
}

/// The solution of the inverse geodesic problem between two distinct
/// positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InverseSolution {
    /// The length of the geodesic.
    distance: Metres,
    /// The azimuth at the start position towards the finish position.
    azimuth_forward: Radians,
    /// The azimuth at the finish position back towards the start position.
    azimuth_reverse: Radians,
    /// The number of iterations taken to converge.
    iterations: u32,
}

impl InverseSolution {
    /// The length of the geodesic on the ellipsoid.
    #[must_use]
    pub const fn distance(&self) -> Metres {
        self.distance
    }

    /// The azimuth at the start position, clockwise from North in [0, 2π).
    #[must_use]
    pub const fn azimuth_forward(&self) -> Radians {
        self.azimuth_forward
    }

    /// The azimuth at the finish position pointing back to the start
    /// position, clockwise from North in [0, 2π).
    #[must_use]
    pub const fn azimuth_reverse(&self) -> Radians {
        self.azimuth_reverse
    }

    /// The forward azimuth in degrees, in [0, 360).
    #[must_use]
    pub fn azimuth_forward_degrees(&self) -> Degrees {
        Degrees::from(self.azimuth_forward)
    }

    /// The reverse azimuth in degrees, in [0, 360).
    #[must_use]
    pub fn azimuth_reverse_degrees(&self) -> Degrees {
        Degrees::from(self.azimuth_reverse)
    }

    /// The number of iterations the solver took.
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }
}

/// The outcome of `calculate_inverse`.
///
/// `IdenticalPoints` is not an error: the distance is zero and the azimuths
/// are undefined.
#[derive(Clone, Debug, PartialEq)]
pub enum GeodesicResult {
    Success(InverseSolution),
    IdenticalPoints,
    Failure(GeoError),
}

impl GeodesicResult {
    /// Whether the solver produced a solution.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The solution, if any.
    #[must_use]
    pub const fn solution(&self) -> Option<&InverseSolution> {
        match self {
            Self::Success(solution) => Some(solution),
            _ => None,
        }
    }

    /// The geodesic length: zero for `IdenticalPoints`, None for a `Failure`.
    #[must_use]
    pub const fn distance(&self) -> Option<Metres> {
        match self {
            Self::Success(solution) => Some(solution.distance),
            Self::IdenticalPoints => Some(Metres(0.0)),
            Self::Failure(_) => None,
        }
    }

    /// Convert into a `Result`, `Ok(None)` for `IdenticalPoints`.
    ///
    /// # Errors
    ///
    /// The `GeoError` of a `Failure`.
    pub fn into_result(self) -> Result<Option<InverseSolution>, GeoError> {
        match self {
            Self::Success(solution) => Ok(Some(solution)),
            Self::IdenticalPoints => Ok(None),
            Self::Failure(error) => Err(error),
        }
    }
}

impl From<GeoError> for GeodesicResult {
    fn from(error: GeoError) -> Self {
        Self::Failure(error)
    }
}

/// Normalise an azimuth in radians to the range [0, 2π).
#[must_use]
fn normalise_azimuth(azimuth: f64) -> Radians {
    let mut value = libm::fmod(azimuth, TAU);
    if value < 0.0 {
        value += TAU;
    }
    if TAU <= value {
        value -= TAU;
    }
    Radians(value)
}

/// Normalise a longitude difference in degrees to the range [-180, 180].
#[must_use]
fn normalise_longitude_difference(delta_lon: f64) -> f64 {
    if 180.0 < delta_lon {
        delta_lon - 360.0
    } else if delta_lon < -180.0 {
        delta_lon + 360.0
    } else {
        delta_lon
    }
}

/// Vincenty's `delta sigma`, the difference between the great circle length
/// on the auxiliary sphere and the scaled geodesic length, Eq. 6.
#[must_use]
fn calculate_delta_sigma(b: f64, sin_sigma: f64, cos_sigma: f64, cos_2sigma_m: f64) -> f64 {
    let cos_sq_2sigma_m = cos_2sigma_m * cos_2sigma_m;
    b * sin_sigma
        * (cos_2sigma_m
            + b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_sq_2sigma_m)
                    - b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_sq_2sigma_m)))
}

/// The great circle arc on the auxiliary sphere for a value of `lambda`.
#[derive(Clone, Copy, Debug)]
struct AuxiliaryArc {
    sin_sigma: f64,
    cos_sigma: f64,
    sigma: f64,
    sin_alpha: f64,
    cos_sq_alpha: f64,
    cos_2sigma_m: f64,
}

/// Solve the inverse geodesic problem between a pair of positions using
/// Vincenty's method.
///
/// The positions are validated first: all coordinates must be finite, then
/// both latitudes must be in [-90, 90] and then both longitudes in
/// [-180, 180] degrees.
/// * `p1`, `p2` - the start and finish positions.
/// * `ellipsoid` - the `Ellipsoid`.
/// * `config` - the iteration limit and convergence tolerance.
///
/// # Examples
/// ```
/// use vincenty_wgs84::*;
///
/// let flinders_peak = GeographicPoint::new(Degrees(-37.951033417), Degrees(144.424867889));
/// let buninyong = GeographicPoint::new(Degrees(-37.652821139), Degrees(143.926495528));
///
/// let result = calculate_inverse(&flinders_peak, &buninyong, &WGS84_ELLIPSOID, &SolverConfig::default());
/// let solution = result.solution().unwrap();
/// assert!((solution.distance().0 - 54_972.271).abs() < 1e-3);
/// assert!((solution.azimuth_forward_degrees().0 - 306.868_159).abs() < 1e-6);
/// assert!((solution.azimuth_reverse_degrees().0 - 127.173_631).abs() < 1e-6);
/// ```
#[must_use]
pub fn calculate_inverse(
    p1: &GeographicPoint,
    p2: &GeographicPoint,
    ellipsoid: &Ellipsoid,
    config: &SolverConfig,
) -> GeodesicResult {
    if let Err(error) = validate_points(&[*p1, *p2]) {
        log::debug!("vincenty inverse rejected {p1:?} {p2:?}: {error}");
        return error.into();
    }

    let f = ellipsoid.f();
    let l = normalise_longitude_difference(p2.lon().0 - p1.lon().0).to_radians();
    let u1 = ellipsoid.calculate_reduced_latitude(Angle::from(p1.lat()));
    let u2 = ellipsoid.calculate_reduced_latitude(Angle::from(p2.lat()));
    let (sin_u1, cos_u1) = (u1.sin().0, u1.cos().0);
    let (sin_u2, cos_u2) = (u2.sin().0, u2.cos().0);

    let mut lambda = l;
    let mut converged = None;
    let mut arc = None;
    for iteration in 1..=config.iteration_limit {
        let sin_lambda = libm::sin(lambda);
        let cos_lambda = libm::cos(lambda);

        let y = cos_u2 * sin_lambda;
        let x = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
        let sin_sigma = libm::sqrt(y * y + x * x);
        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        if sin_sigma == 0.0 && 0.0 < cos_sigma {
            log::debug!("vincenty inverse: identical points {p1:?} {p2:?}");
            return GeodesicResult::IdenticalPoints;
        }
        let sigma = libm::atan2(sin_sigma, cos_sigma);

        // sin_sigma is only zero here between opposite poles, along a meridian
        let sin_alpha = if sin_sigma == 0.0 {
            0.0
        } else {
            cos_u1 * cos_u2 * sin_lambda / sin_sigma
        };
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

        // On the Equator cos_sq_alpha is zero and cos_2sigma_m is 0/0
        let cos_2sigma_m = if cos_sq_alpha == 0.0 {
            0.0
        } else {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        };

        let c = evaluate_vincenty_c(f, cos_sq_alpha);
        let lambda_previous = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));
        log::trace!("vincenty inverse iteration {iteration}: lambda {lambda}");

        arc = Some(AuxiliaryArc {
            sin_sigma,
            cos_sigma,
            sigma,
            sin_alpha,
            cos_sq_alpha,
            cos_2sigma_m,
        });
        if libm::fabs(lambda - lambda_previous) <= config.tolerance.0 {
            converged = Some(iteration);
            break;
        }
    }

    let (Some(iterations), Some(arc)) = (converged, arc) else {
        log::debug!(
            "vincenty inverse did not converge in {} iterations: {p1:?} {p2:?}",
            config.iteration_limit
        );
        return GeoError::DidNotConverge {
            iterations: config.iteration_limit,
        }
        .into();
    };
    log::debug!("vincenty inverse converged in {iterations} iterations");

    let u_sq = calculate_u_sq(arc.cos_sq_alpha, ellipsoid.ep_2());
    let a = evaluate_vincenty_a(u_sq);
    let b = evaluate_vincenty_b(u_sq);
    let delta_sigma = calculate_delta_sigma(b, arc.sin_sigma, arc.cos_sigma, arc.cos_2sigma_m);
    let distance = Metres(ellipsoid.b().0 * a * (arc.sigma - delta_sigma));

    let sin_lambda = libm::sin(lambda);
    let cos_lambda = libm::cos(lambda);
    let alpha1 = libm::atan2(
        cos_u2 * sin_lambda,
        cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda,
    );
    // Vincenty's alpha2 continues along the geodesic, the reverse azimuth
    // points back along it.
    let alpha2 = libm::atan2(
        cos_u1 * sin_lambda,
        -sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_lambda,
    );

    GeodesicResult::Success(InverseSolution {
        distance,
        azimuth_forward: normalise_azimuth(alpha1),
        azimuth_reverse: normalise_azimuth(alpha2 + PI),
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WGS84_ELLIPSOID;
    use angle_sc::is_within_tolerance;

    fn point(lat: f64, lon: f64) -> GeographicPoint {
        GeographicPoint::new(Degrees(lat), Degrees(lon))
    }

    fn solve(p1: GeographicPoint, p2: GeographicPoint) -> GeodesicResult {
        calculate_inverse(&p1, &p2, &WGS84_ELLIPSOID, &SolverConfig::default())
    }

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default();
        assert_eq!(100, config.iteration_limit);
        assert_eq!(Radians(1e-12), config.tolerance);

        let config = config
            .with_iteration_limit(20)
            .with_tolerance(Radians(1e-9));
        assert_eq!(SolverConfig::new(20, Radians(1e-9)), config);
    }

    #[test]
    fn test_normalise_azimuth() {
        assert_eq!(Radians(0.0), normalise_azimuth(0.0));
        assert_eq!(Radians(0.0), normalise_azimuth(TAU));
        assert_eq!(Radians(PI), normalise_azimuth(PI));
        assert!(is_within_tolerance(
            1.5 * PI,
            normalise_azimuth(-0.5 * PI).0,
            4.0 * f64::EPSILON
        ));
        assert!(is_within_tolerance(
            0.5 * PI,
            normalise_azimuth(2.5 * PI).0,
            4.0 * f64::EPSILON
        ));
        // Tiny negative values must not round up to 2π
        let tiny = normalise_azimuth(-1e-18);
        assert!((0.0..TAU).contains(&tiny.0));
    }

    #[test]
    fn test_normalise_longitude_difference() {
        assert_eq!(0.0, normalise_longitude_difference(360.0));
        assert_eq!(-2.0, normalise_longitude_difference(358.0));
        assert_eq!(2.0, normalise_longitude_difference(-358.0));
        assert_eq!(180.0, normalise_longitude_difference(180.0));
        assert_eq!(-180.0, normalise_longitude_difference(-180.0));
        assert_eq!(-45.5, normalise_longitude_difference(-45.5));
    }

    #[test]
    fn test_calculate_delta_sigma() {
        assert_eq!(0.0, calculate_delta_sigma(0.0, 0.5, 0.5, 0.5));
        // On the Equator only the cos_sigma term remains
        assert!(is_within_tolerance(
            -0.001 * 0.8 * (0.001 / 4.0) * 0.6,
            calculate_delta_sigma(0.001, 0.8, 0.6, 0.0),
            f64::EPSILON
        ));
    }

    #[test]
    fn test_validation_errors() {
        let valid = point(10.0, 10.0);

        assert_eq!(
            GeodesicResult::Failure(GeoError::InvalidLatitude { value: 91.0 }),
            solve(valid, point(91.0, 0.0))
        );
        assert_eq!(
            GeodesicResult::Failure(GeoError::InvalidLatitude { value: -91.0 }),
            solve(point(-91.0, 0.0), valid)
        );
        assert_eq!(
            GeodesicResult::Failure(GeoError::InvalidLongitude { value: 181.0 }),
            solve(valid, point(0.0, 181.0))
        );
        assert_eq!(
            GeodesicResult::Failure(GeoError::InvalidLongitude { value: -200.0 }),
            solve(point(0.0, -200.0), valid)
        );
        assert_eq!(
            GeodesicResult::Failure(GeoError::NonNumericInput),
            solve(valid, point(f64::NAN, 0.0))
        );
        assert_eq!(
            GeodesicResult::Failure(GeoError::NonNumericInput),
            solve(point(0.0, f64::NEG_INFINITY), valid)
        );
        // Non-numeric input takes precedence over a range error
        assert_eq!(
            GeodesicResult::Failure(GeoError::NonNumericInput),
            solve(point(95.0, 0.0), point(0.0, f64::NAN))
        );
        // Latitudes are validated before longitudes
        assert_eq!(
            GeodesicResult::Failure(GeoError::InvalidLatitude { value: 95.0 }),
            solve(point(0.0, 190.0), point(95.0, 0.0))
        );
    }

    #[test]
    fn test_identical_points() {
        let p = point(51.4934, -0.0098);
        let result = solve(p, p);
        assert_eq!(GeodesicResult::IdenticalPoints, result);
        assert!(!result.is_success());
        assert_eq!(None, result.solution());
        assert_eq!(Some(Metres(0.0)), result.distance());
        assert_eq!(Ok(None), result.into_result());

        assert_eq!(
            GeodesicResult::IdenticalPoints,
            solve(point(0.0, 0.0), point(0.0, 0.0))
        );
        // The same meridian at longitudes -180 and 180
        assert_eq!(
            GeodesicResult::IdenticalPoints,
            solve(point(0.0, -180.0), point(0.0, 180.0))
        );
    }

    #[test]
    fn test_identical_points_at_the_poles() {
        // Every longitude meets at a pole
        assert_eq!(
            GeodesicResult::IdenticalPoints,
            solve(point(90.0, 0.0), point(90.0, 50.0))
        );
        assert_eq!(
            GeodesicResult::IdenticalPoints,
            solve(point(-90.0, -170.0), point(-90.0, 10.0))
        );
        assert_eq!(
            GeodesicResult::IdenticalPoints,
            solve(point(90.0, 180.0), point(90.0, -180.0))
        );
        assert_eq!(
            Some(Metres(0.0)),
            solve(point(-90.0, 45.0), point(-90.0, -135.0)).distance()
        );
    }

    #[test]
    fn test_known_convergence() {
        let p1 = point(50.0608, 5.7307);
        let p2 = point(58.6437, 3.07);
        let result = solve(p1, p2);
        let solution = result.solution().unwrap();

        assert!(is_within_tolerance(
            970_708.320_716_087,
            solution.distance().0,
            1e-6
        ));
        assert!(is_within_tolerance(
            350.809_304_320_869_7,
            solution.azimuth_forward_degrees().0,
            1e-9
        ));
        assert!(is_within_tolerance(
            168.640_959_392_497_1,
            solution.azimuth_reverse_degrees().0,
            1e-9
        ));
        assert!(solution.iterations() <= 10);

        // Within 0.3% of the great circle distance on the mean sphere
        let sphere = crate::great_circle::wgs84_distance(&p1, &p2).unwrap();
        assert!(libm::fabs(solution.distance().0 - sphere.0) < 0.003 * sphere.0);

        // The azimuths differ by 180° plus the meridian convergence
        let difference = solution.azimuth_forward_degrees().0 - solution.azimuth_reverse_degrees().0;
        assert!(libm::fabs(difference - 180.0) > 1.0);
        assert!(libm::fabs(difference - 180.0) < 5.0);
    }

    #[test]
    fn test_flinders_peak_to_buninyong() {
        // Vincenty (1975), test line (a) in Bessel units converted to WGS84 by
        // Geoscience Australia.
        let p1 = point(-37.951_033_416_666_67, 144.424_867_888_888_9);
        let p2 = point(-37.652_821_138_888_89, 143.926_495_527_777_8);
        let solution = solve(p1, p2).into_result().unwrap().unwrap();

        assert!(is_within_tolerance(54_972.271, solution.distance().0, 1e-3));
        // 306° 52' 05.37"
        assert!(is_within_tolerance(
            306.868_158_333,
            solution.azimuth_forward_degrees().0,
            2e-6
        ));
        // 127° 10' 25.07"
        assert!(is_within_tolerance(
            127.173_630_556,
            solution.azimuth_reverse_degrees().0,
            1e-6
        ));
    }

    #[test]
    fn test_symmetry() {
        let p1 = point(-33.9, 18.4);
        let p2 = point(51.5, -0.1);

        let forward = *solve(p1, p2).solution().unwrap();
        let backward = *solve(p2, p1).solution().unwrap();

        assert!(is_within_tolerance(
            forward.distance().0,
            backward.distance().0,
            1e-6
        ));
        assert!(is_within_tolerance(
            forward.azimuth_forward().0,
            backward.azimuth_reverse().0,
            1e-10
        ));
        assert!(is_within_tolerance(
            forward.azimuth_reverse().0,
            backward.azimuth_forward().0,
            1e-10
        ));
    }

    #[test]
    fn test_equatorial_geodesic() {
        // Along the Equator the length is the Semimajor axis times the
        // longitude difference.
        let solution = *solve(point(0.0, 10.0), point(0.0, 30.0))
            .solution()
            .unwrap();
        let expected = WGS84_ELLIPSOID.a().0 * 20.0_f64.to_radians();
        assert!(solution.distance().0.is_finite());
        assert!(is_within_tolerance(expected, solution.distance().0, 1e-4));
        assert!(is_within_tolerance(
            90.0,
            solution.azimuth_forward_degrees().0,
            1e-9
        ));
        assert!(is_within_tolerance(
            270.0,
            solution.azimuth_reverse_degrees().0,
            1e-9
        ));

        // Westbound across the antimeridian
        let solution = *solve(point(0.0, -179.0), point(0.0, 179.0))
            .solution()
            .unwrap();
        let expected = WGS84_ELLIPSOID.a().0 * 2.0_f64.to_radians();
        assert!(is_within_tolerance(expected, solution.distance().0, 1e-5));
        assert!(is_within_tolerance(
            270.0,
            solution.azimuth_forward_degrees().0,
            1e-9
        ));
    }

    #[test]
    fn test_meridional_geodesic() {
        let solution = *solve(point(10.0, 30.0), point(60.0, 30.0))
            .solution()
            .unwrap();
        assert!(is_within_tolerance(
            5_548_217.986_255_098,
            solution.distance().0,
            1e-6
        ));
        assert_eq!(0.0, solution.azimuth_forward().0);
        assert!(is_within_tolerance(PI, solution.azimuth_reverse().0, 1e-15));
        assert_eq!(1, solution.iterations());

        // Pole to pole
        let solution = *solve(point(-90.0, 0.0), point(90.0, 0.0))
            .solution()
            .unwrap();
        assert!(is_within_tolerance(
            20_003_931.458_623_584,
            solution.distance().0,
            1e-6
        ));
        assert_eq!(1, solution.iterations());

        // Opposite poles are not identical, whatever their longitudes
        for (lon1, lon2) in [(0.0, 180.0), (45.0, -100.0), (-170.0, 10.0)] {
            let result = solve(point(90.0, lon1), point(-90.0, lon2));
            assert!(result.is_success());
            assert!(is_within_tolerance(
                20_003_931.458_623_584,
                result.distance().unwrap().0,
                1e-6
            ));
        }
    }

    #[test]
    fn test_non_convergence() {
        let result = solve(point(0.0, 0.0), point(0.5, 179.7));
        assert_eq!(
            GeodesicResult::Failure(GeoError::DidNotConverge { iterations: 100 }),
            result
        );
        assert_eq!(None, result.distance());
        assert_eq!(
            Err(GeoError::DidNotConverge { iterations: 100 }),
            result.into_result()
        );

        // Exactly antipodal points on the Equator
        assert!(!solve(point(0.0, 0.0), point(0.0, 180.0)).is_success());
    }

    #[test]
    fn test_tolerance_trade_off() {
        // Converges linearly: 182 iterations at 1e-12, 126 at 1e-9
        let p1 = point(0.0, 0.0);
        let p2 = point(0.5, 179.5);

        let strict = SolverConfig::new(150, Radians(1e-12));
        assert_eq!(
            GeodesicResult::Failure(GeoError::DidNotConverge { iterations: 150 }),
            calculate_inverse(&p1, &p2, &WGS84_ELLIPSOID, &strict)
        );

        let relaxed = strict.with_tolerance(Radians(1e-9));
        let result = calculate_inverse(&p1, &p2, &WGS84_ELLIPSOID, &relaxed);
        let solution = result.solution().unwrap();
        assert!(solution.iterations() <= 150);
        assert!(is_within_tolerance(
            19_936_288.58,
            solution.distance().0,
            0.01
        ));

        // A larger iteration limit also converges at 1e-12
        let longer = strict.with_iteration_limit(300);
        let result = calculate_inverse(&p1, &p2, &WGS84_ELLIPSOID, &longer);
        let solution = result.solution().unwrap();
        assert!(150 < solution.iterations());
        assert!(is_within_tolerance(
            19_936_288.579,
            solution.distance().0,
            1e-3
        ));
    }

    #[test]
    fn test_iteration_limit_is_enforced() {
        let config = SolverConfig::default().with_iteration_limit(1);
        let result = calculate_inverse(
            &point(50.0608, 5.7307),
            &point(58.6437, 3.07),
            &WGS84_ELLIPSOID,
            &config,
        );
        assert_eq!(
            GeodesicResult::Failure(GeoError::DidNotConverge { iterations: 1 }),
            result
        );

        let config = SolverConfig::default().with_iteration_limit(0);
        assert!(!calculate_inverse(
            &point(50.0608, 5.7307),
            &point(58.6437, 3.07),
            &WGS84_ELLIPSOID,
            &config,
        )
        .is_success());
    }

    #[test]
    fn test_sphere_matches_great_circle() {
        let radius = Metres(6_371_000.0);
        let sphere = Ellipsoid::sphere(radius);
        let p1 = point(40.7128, -74.006);
        let p2 = point(35.6762, 139.6503);

        let result = calculate_inverse(&p1, &p2, &sphere, &SolverConfig::default());
        let solution = result.solution().unwrap();
        // lambda never changes without flattening
        assert_eq!(1, solution.iterations());

        let gc = crate::great_circle::distance(&p1, &p2, radius).unwrap();
        assert!(is_within_tolerance(gc.0, solution.distance().0, 1e-4));
    }

    #[test]
    fn test_azimuth_ranges() {
        for lat in (-80..=80).step_by(20) {
            for lon in (-170..=170).step_by(34) {
                let p1 = point(f64::from(lat), f64::from(lon));
                let p2 = point(f64::from(-lat / 2 + 7), f64::from(lon / 3 + 11));
                if let GeodesicResult::Success(solution) = solve(p1, p2) {
                    assert!(solution.distance().0.is_finite());
                    assert!(0.0 <= solution.distance().0);
                    assert!((0.0..TAU).contains(&solution.azimuth_forward().0));
                    assert!((0.0..TAU).contains(&solution.azimuth_reverse().0));
                    assert!(solution.iterations() <= DEFAULT_ITERATION_LIMIT);
                }
            }
        }
    }
}
