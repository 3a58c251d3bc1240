// Copyright (c) 2018-2023  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors of building and querying scenario statistics.

use std::sync::Arc;

use derive_more::{Display, Error, From};

use crate::weight::WeightError;

/// Result of building or querying scenario statistics.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error of this crate.
///
/// Every variant except [`Error::NotFound`] aborts the construction of
/// [`ScenarioLineCountStatistics`].
///
/// [`ScenarioLineCountStatistics`]: crate::ScenarioLineCountStatistics
#[derive(Clone, Debug, Display, Error, From)]
pub enum Error {
    /// Failed to parse a [`Feature`].
    ///
    /// [`Feature`]: gherkin::Feature
    #[display(fmt = "Failed to parse feature: {}", _0)]
    Parse(Arc<gherkin::ParseFileError>),

    /// Requested [Gherkin] dialect is not supported.
    ///
    /// [Gherkin]: https://cucumber.io/docs/gherkin/reference
    #[display(fmt = "Unsupported Gherkin language: {}", language)]
    #[from(ignore)]
    Language {
        /// Requested language code.
        language: String,
    },

    /// Failed to extract scenarios out of a feature.
    #[display(fmt = "{}", _0)]
    Extraction(ExtractionError),

    /// No record exists for the requested feature and scenario.
    #[display(
        fmt = "No result found for scenario '{}' in feature '{}'",
        scenario,
        feature
    )]
    #[from(ignore)]
    NotFound {
        /// Requested feature name.
        feature: String,

        /// Requested scenario name.
        scenario: String,
    },
}

impl From<gherkin::ParseFileError> for Error {
    fn from(err: gherkin::ParseFileError) -> Self {
        Self::Parse(Arc::new(err))
    }
}

/// Error of extracting scenarios out of a feature, caused by one of its
/// scenarios.
#[derive(Clone, Debug, Display, Error)]
#[display(fmt = "Could not extract scenarios from '{}': {}", feature, source)]
pub struct ExtractionError {
    /// Name of the feature.
    pub feature: String,

    /// Failure of the offending scenario.
    pub source: WeightError,
}
