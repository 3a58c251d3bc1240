// Copyright (c) 2018-2023  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Static step-count weighting of [Gherkin] scenarios, used for slicing a
//! test suite across parallel workers.
//!
//! Every scenario weighs as much as the steps it runs: its own steps plus the
//! leading background steps of its feature. A scenario outline weighs that
//! much once per row of its examples.
//!
//! ```rust,no_run
//! use cucumber_weights::{ScenarioLineCountStatistics, TestStatistics as _};
//!
//! let stats = ScenarioLineCountStatistics::from_feature_path("features")?;
//! let weight = stats.scenario_weight_for("Login", "Valid login")?;
//! println!("{stats}: {weight} steps");
//! # Ok::<_, cucumber_weights::Error>(())
//! ```
//!
//! [Gherkin]: https://cucumber.io/docs/gherkin/reference

#![deny(
    macro_use_extern_crate,
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    trivial_casts,
    trivial_numeric_casts
)]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_results
)]

pub mod document;
pub mod error;
pub mod extract;
pub mod parser;
pub mod statistics;
pub mod weight;

#[doc(inline)]
pub use self::{
    document::FeatureDocument,
    error::{Error, Result},
    extract::TestScenarioResult,
    parser::Parser,
    statistics::{ScenarioLineCountStatistics, TestStatistics},
    weight::Weight,
};
