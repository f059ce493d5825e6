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

//! The WGS 84 primary parameters as published by the US National
//! Geospatial-Intelligence Agency in
//! [NGA.STND.0036](https://earth-info.nga.mil/php/download.php?file=coord-wgs84),
//! Table 3.1, together with the derived IUGG mean radius.

use crate::ellipsoid::Metres;

/// The WGS 84 Semimajor axis measured in metres: the equatorial radius.
pub const A: Metres = Metres(6_378_137.0);

/// The WGS 84 flattening, a ratio.
pub const F: f64 = 1.0 / 298.257_223_563;

/// The WGS 84 arithmetic mean radius `(2a + b) / 3` in metres.
pub const MEAN_RADIUS: Metres = super::calculate_mean_radius(A, F);
