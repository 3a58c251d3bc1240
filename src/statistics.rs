// Copyright (c) 2018-2023  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Immutable per-scenario [`Weight`] statistics of a test suite.

use std::{
    any,
    collections::{hash_map::Entry, HashMap},
    fmt,
    path::Path,
};

use inflector::Inflector as _;

use crate::{
    document::FeatureDocument,
    error::{Error, Result},
    extract::{extract, TestScenarioResult},
    parser::{self, Parser},
    weight::Weight,
};

/// Source of per-scenario [`Weight`]s for slicing a test suite.
pub trait TestStatistics {
    /// Returns the [`Weight`] of the `scenario` in the `feature`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no such scenario has been recorded.
    fn scenario_weight_for(&self, feature: &str, scenario: &str)
        -> Result<Weight>;

    /// Returns all the recorded [`TestScenarioResult`]s, in parse order.
    fn records(&self) -> &[TestScenarioResult];
}

/// [`TestStatistics`] weighting scenarios by their step count.
///
/// Built once, and never mutated afterwards.
#[derive(Clone, Debug, Default)]
pub struct ScenarioLineCountStatistics {
    /// Records, in parse order.
    results: Vec<TestScenarioResult>,

    /// Feature name -> scenario name -> index of the first matching record.
    index: HashMap<String, HashMap<String, usize>>,
}

impl ScenarioLineCountStatistics {
    /// Builds statistics out of a single `.feature` file or directory.
    ///
    /// # Errors
    ///
    /// See [`ScenarioLineCountStatistics::from_feature_paths()`].
    pub fn from_feature_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_feature_paths([path])
    }

    /// Builds statistics out of the given `.feature` files or directories,
    /// using the [`parser::Basic`] [`Parser`].
    ///
    /// # Errors
    ///
    /// If any of the `paths` fails to parse, or any of its scenarios fails to
    /// be weighted.
    pub fn from_feature_paths<I: AsRef<Path>>(
        paths: impl IntoIterator<Item = I>,
    ) -> Result<Self> {
        Self::with_parser(parser::Basic::new(), paths)
    }

    /// Builds statistics out of the given `inputs` parsed by the provided
    /// [`Parser`].
    ///
    /// # Errors
    ///
    /// If the [`Parser`] fails on any of the `inputs`, or any scenario fails
    /// to be weighted.
    pub fn with_parser<P, I>(
        parser: P,
        inputs: impl IntoIterator<Item = I>,
    ) -> Result<Self>
    where
        P: Parser<I> + Clone,
    {
        let documents = inputs
            .into_iter()
            .flat_map(|input| parser.clone().parse(input))
            .collect::<Result<Vec<_>>>()?;
        Self::from_documents(documents)
    }

    /// Builds statistics out of already parsed `documents`.
    ///
    /// Absent documents contribute no records.
    ///
    /// # Errors
    ///
    /// If any scenario fails to be weighted.
    pub fn from_documents<D>(documents: impl IntoIterator<Item = D>) -> Result<Self>
    where
        D: Into<Option<FeatureDocument>>,
    {
        let mut results = Vec::new();
        for doc in documents {
            results.extend(extract(doc.into().as_ref())?);
        }

        let mut index = HashMap::<_, HashMap<_, _>>::new();
        for (i, record) in results.iter().enumerate() {
            match index
                .entry(record.feature.clone())
                .or_default()
                .entry(record.scenario.clone())
            {
                Entry::Vacant(e) => {
                    _ = e.insert(i);
                }
                Entry::Occupied(_) => tracing::warn!(
                    feature = %record.feature,
                    scenario = %record.scenario,
                    "duplicate scenario is shadowed by its first occurrence",
                ),
            }
        }

        tracing::debug!(scenarios = results.len(), "built scenario statistics");
        Ok(Self { results, index })
    }

    /// Sums the [`Weight`]s of all the recorded scenarios.
    #[must_use]
    pub fn total_weight(&self) -> Weight {
        self.results.iter().map(TestScenarioResult::duration).sum()
    }
}

impl TestStatistics for ScenarioLineCountStatistics {
    fn scenario_weight_for(
        &self,
        feature: &str,
        scenario: &str,
    ) -> Result<Weight> {
        self.index
            .get(feature)
            .and_then(|scenarios| scenarios.get(scenario))
            .and_then(|&i| self.results.get(i))
            .map(TestScenarioResult::duration)
            .ok_or_else(|| Error::NotFound {
                feature: feature.to_owned(),
                scenario: scenario.to_owned(),
            })
    }

    fn records(&self) -> &[TestScenarioResult] {
        &self.results
    }
}

impl fmt::Display for ScenarioLineCountStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = any::type_name::<Self>();
        let name = name.rsplit("::").next().unwrap_or(name);
        f.write_str(&name.to_kebab_case())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        document::{Background, Examples, FeatureDocument, Scenario},
        Error, TestScenarioResult, Weight,
    };

    use super::{ScenarioLineCountStatistics, TestStatistics as _};

    fn login() -> FeatureDocument {
        FeatureDocument::new("Login")
            .with_child(Background::new(["a user", "the login page"]))
            .with_child(Scenario::new("Valid login", ["a", "b", "c"]))
            .with_child(
                Scenario::new("Invalid login attempts", ["a", "b", "c", "d"])
                    .with_examples(Examples::with_row_count(2))
                    .with_examples(Examples::with_row_count(3)),
            )
    }

    #[test]
    fn looks_up_weights() {
        let stats = ScenarioLineCountStatistics::from_documents([login()])
            .unwrap();

        assert_eq!(
            stats.scenario_weight_for("Login", "Valid login").unwrap(),
            Weight::from(5_u64),
        );
        assert_eq!(
            stats
                .scenario_weight_for("Login", "Invalid login attempts")
                .unwrap(),
            Weight::from(30_u64),
        );
        assert_eq!(stats.total_weight(), Weight::from(35_u64));
    }

    #[test]
    fn lookup_is_idempotent() {
        let stats = ScenarioLineCountStatistics::from_documents([login()])
            .unwrap();

        let first = stats.scenario_weight_for("Login", "Valid login").unwrap();
        let second = stats.scenario_weight_for("Login", "Valid login").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn unknown_scenario_is_not_found() {
        let stats = ScenarioLineCountStatistics::from_documents([login()])
            .unwrap();

        let err = stats.scenario_weight_for("Login", "Logout").unwrap_err();
        assert!(matches!(
            err,
            Error::NotFound { ref feature, ref scenario }
                if feature == "Login" && scenario == "Logout",
        ));
        assert!(stats.scenario_weight_for("Logout", "Valid login").is_err());
        assert_eq!(stats.records().len(), 2);
    }

    #[test]
    fn first_duplicate_wins() {
        let first = FeatureDocument::new("Dup")
            .with_child(Scenario::new("same", ["a"]));
        let second = FeatureDocument::new("Dup")
            .with_child(Scenario::new("same", ["a", "b", "c"]));

        let stats =
            ScenarioLineCountStatistics::from_documents([first, second])
                .unwrap();

        assert_eq!(
            stats.scenario_weight_for("Dup", "same").unwrap(),
            Weight::from(1_u64),
        );
        assert_eq!(
            stats.records(),
            [
                TestScenarioResult::new("Dup", "same", 1_u64),
                TestScenarioResult::new("Dup", "same", 3_u64),
            ],
        );
    }

    #[test]
    fn absent_documents_are_skipped() {
        let stats = ScenarioLineCountStatistics::from_documents([
            None,
            Some(login()),
            None,
        ])
        .unwrap();

        assert_eq!(stats.records().len(), 2);
    }

    #[test]
    fn no_paths_yield_no_records() {
        let stats = ScenarioLineCountStatistics::from_feature_paths(
            Vec::<&str>::new(),
        )
        .unwrap();

        assert!(stats.records().is_empty());
        assert_eq!(stats.total_weight(), Weight::ZERO);
    }

    #[test]
    fn displays_as_kebab_case() {
        let stats = ScenarioLineCountStatistics::default();

        assert_eq!(stats.to_string(), "scenario-line-count-statistics");
    }

    #[test]
    fn is_shareable_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<ScenarioLineCountStatistics>();
    }
}
