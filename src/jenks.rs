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

//! The `jenks` module classifies a dataset into natural breaks.
//!
//! George Jenks'
//! [natural breaks](https://en.wikipedia.org/wiki/Jenks_natural_breaks_optimization)
//! method partitions values into classes that minimise each class's
//! deviation from its mean. This module refines the classes iteratively,
//! like one-dimensional k-means: each value is assigned to the class with
//! the nearest mean, then the means are recalculated, until the classes are
//! stable.

use alloc::vec::Vec;
use thiserror::Error;

/// The maximum number of refinement passes.
pub const MAX_ITERATIONS: u32 = 100;

/// The reasons that a classification can fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClassificationError {
    /// The dataset has no values.
    #[error("the dataset is empty")]
    EmptyData,
    /// A value is NaN or infinite.
    #[error("the dataset contains a value that is not a finite number")]
    NonNumericInput,
    /// Zero classes, or more classes than distinct values.
    #[error("cannot make {requested} classes from {available} distinct values")]
    InvalidClassCount { requested: usize, available: usize },
}

/// The mean of a non-empty slice.
#[allow(clippy::cast_precision_loss)]
#[must_use]
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Calculate the start index of each class so that every value belongs to
/// the class with the nearest mean.
///
/// The values are sorted and the means ascending, so the boundary between
/// adjacent classes is the first value above the midpoint of their means.
/// Every class keeps at least one value.
#[must_use]
fn assign_to_nearest_means(values: &[f64], starts: &[usize]) -> Vec<usize> {
    let n = values.len();
    let k = starts.len();
    let means: Vec<f64> = starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(n);
            mean(&values[start..end])
        })
        .collect();

    let mut new_starts = Vec::with_capacity(k);
    new_starts.push(0);
    for j in 1..k {
        let midpoint = 0.5 * (means[j - 1] + means[j]);
        let boundary = values.partition_point(|&v| v <= midpoint);
        let lowest = new_starts[j - 1] + 1;
        let highest = n - (k - j);
        new_starts.push(boundary.clamp(lowest, highest));
    }
    new_starts
}

/// Classify a dataset into natural breaks.
/// * `data` - the values, in any order, duplicates allowed.
/// * `num_classes` - the number of classes, at least one and at most the
///   number of distinct values.
///
/// returns `num_classes + 1` ascending break values: the minimum value
/// followed by the maximum value of each class.
///
/// # Errors
///
/// `EmptyData`, `NonNumericInput` if any value is not finite, or
/// `InvalidClassCount`.
///
/// # Examples
/// ```
/// use vincenty_wgs84::jenks::jenks_breaks;
///
/// let data = [1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 20.0, 21.0, 22.0];
/// let breaks = jenks_breaks(&data, 3).unwrap();
/// assert_eq!(vec![1.0, 3.0, 12.0, 22.0], breaks);
/// ```
pub fn jenks_breaks(data: &[f64], num_classes: usize) -> Result<Vec<f64>, ClassificationError> {
    if data.is_empty() {
        return Err(ClassificationError::EmptyData);
    }
    if data.iter().any(|v| !v.is_finite()) {
        return Err(ClassificationError::NonNumericInput);
    }

    let mut values = data.to_vec();
    values.sort_unstable_by(f64::total_cmp);
    values.dedup();

    let n = values.len();
    if num_classes == 0 || n < num_classes {
        return Err(ClassificationError::InvalidClassCount {
            requested: num_classes,
            available: n,
        });
    }

    // Start with classes of (nearly) equal numbers of values
    let mut starts: Vec<usize> = (0..num_classes).map(|i| i * n / num_classes).collect();
    for iteration in 1..=MAX_ITERATIONS {
        let new_starts = assign_to_nearest_means(&values, &starts);
        if new_starts == starts {
            log::debug!("jenks breaks stable after {iteration} iterations");
            break;
        }
        starts = new_starts;
    }

    let mut breaks = Vec::with_capacity(num_classes + 1);
    breaks.push(values[0]);
    breaks.extend(
        starts
            .iter()
            .skip(1)
            .map(|&start| values[start - 1])
            .chain(core::iter::once(values[n - 1])),
    );
    Ok(breaks)
}
