// Copyright (c) 2018-2023  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Step-count weighting of [`Scenario`]s.

use std::iter;

use derive_more::{Display, Error, From, Into};

use crate::document::Scenario;

/// Expected execution cost of a [`Scenario`], measured in steps.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Weight(u64);

impl Weight {
    /// [`Weight`] of a [`Scenario`] that never runs.
    pub const ZERO: Self = Self(0);

    /// Returns this [`Weight`] as a plain step count.
    #[must_use]
    pub const fn steps(self) -> u64 {
        self.0
    }

    /// Returns this [`Weight`] as a floating-point number, suitable for
    /// proportional slicing.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// Adds two [`Weight`]s, returning [`None`] on overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl iter::Sum for Weight {
    /// Saturates at [`u64::MAX`].
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.fold(0_u64, |acc, w| acc.saturating_add(w.0)))
    }
}

/// Error of computing a [`Weight`] for a [`Scenario`].
#[derive(Clone, Debug, Display, Error)]
#[display(
    fmt = "Could not determine step count for scenario '{}': {} example \
           row(s) of {} background and {} scenario step(s) overflow",
    scenario,
    rows,
    background_steps,
    steps
)]
pub struct WeightError {
    /// Name of the [`Scenario`].
    pub scenario: String,

    /// Number of inherited background steps.
    pub background_steps: usize,

    /// Number of the [`Scenario`]'s own steps.
    pub steps: usize,

    /// Total number of [`Examples`] body rows.
    ///
    /// [`Examples`]: crate::document::Examples
    pub rows: usize,
}

/// Computes the [`Weight`] of the given `scenario` with `background_steps`
/// inherited from its feature.
///
/// A [`Scenario Outline`][1] is weighted as if it was expanded into one
/// scenario per [`Examples`] body row, so an outline without rows weighs
/// nothing.
///
/// # Errors
///
/// If the resulting step count overflows.
///
/// [1]: https://cucumber.io/docs/gherkin/reference#scenario-outline
/// [`Examples`]: crate::document::Examples
pub fn weight(
    background_steps: usize,
    scenario: &Scenario,
) -> Result<Weight, WeightError> {
    let steps = scenario.steps.len();
    let rows = scenario.examples.iter().map(|ex| ex.rows.len()).sum::<usize>();
    let err = || WeightError {
        scenario: scenario.name.clone(),
        background_steps,
        steps,
        rows,
    };

    let per_run = u64::try_from(background_steps)
        .ok()
        .zip(u64::try_from(steps).ok())
        .and_then(|(bg, own)| bg.checked_add(own))
        .ok_or_else(err)?;

    let total = if scenario.is_outline() {
        u64::try_from(rows)
            .ok()
            .and_then(|rows| rows.checked_mul(per_run))
            .ok_or_else(err)?
    } else {
        per_run
    };

    Ok(Weight(total))
}
