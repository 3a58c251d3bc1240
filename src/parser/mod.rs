// Copyright (c) 2018-2023  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tools for loading [Gherkin] files into [`FeatureDocument`]s.
//!
//! [Gherkin]: https://cucumber.io/docs/gherkin/reference

pub mod basic;

use crate::{document::FeatureDocument, error::Result};

#[doc(inline)]
pub use self::basic::Basic;

/// Source of parsed [`FeatureDocument`]s.
///
/// Any failing item aborts the construction of
/// [`ScenarioLineCountStatistics`] it's used for.
///
/// [`ScenarioLineCountStatistics`]: crate::ScenarioLineCountStatistics
pub trait Parser<I> {
    /// Output [`Iterator`] of parsed [`FeatureDocument`]s.
    type Output: Iterator<Item = Result<FeatureDocument>>;

    /// Parses the given `input` into an [`Iterator`] of
    /// [`FeatureDocument`]s, preserving their order.
    fn parse(self, input: I) -> Self::Output;
}
