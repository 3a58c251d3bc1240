// Copyright (c) 2018-2023  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Flattening of [`FeatureDocument`]s into weighted scenario records.

use crate::{
    document::FeatureDocument,
    error::{ExtractionError, Result},
    weight::{self, Weight},
};

/// Weighted scenario of a feature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestScenarioResult {
    /// Name of the feature the scenario belongs to.
    pub feature: String,

    /// Name of the scenario.
    pub scenario: String,

    /// Computed [`Weight`] of the scenario.
    pub weight: Weight,
}

impl TestScenarioResult {
    /// Creates a new [`TestScenarioResult`].
    #[must_use]
    pub fn new(
        feature: impl Into<String>,
        scenario: impl Into<String>,
        weight: impl Into<Weight>,
    ) -> Self {
        Self {
            feature: feature.into(),
            scenario: scenario.into(),
            weight: weight.into(),
        }
    }

    /// Expected cost of running this scenario.
    #[must_use]
    pub const fn duration(&self) -> Weight {
        self.weight
    }
}

/// Extracts weighted scenario records out of the given `document`, in source
/// order.
///
/// An absent `document` yields no records. Non-scenario children are skipped.
///
/// # Errors
///
/// If the [`Weight`] of any scenario cannot be computed.
pub fn extract(
    document: Option<&FeatureDocument>,
) -> Result<Vec<TestScenarioResult>> {
    let Some(document) = document else {
        return Ok(Vec::new());
    };

    let background_steps = document.background_step_count();
    document
        .scenarios()
        .map(|scenario| -> Result<TestScenarioResult> {
            let weight = weight::weight(background_steps, scenario).map_err(
                |source| ExtractionError {
                    feature: document.name.clone(),
                    source,
                },
            )?;
            tracing::debug!(
                feature = %document.name,
                scenario = %scenario.name,
                %weight,
                "weighted scenario",
            );
            Ok(TestScenarioResult::new(
                document.name.as_str(),
                scenario.name.as_str(),
                weight,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::document::{
        Background, Examples, FeatureChild, FeatureDocument, Scenario,
    };

    use super::{extract, TestScenarioResult};

    fn login() -> FeatureDocument {
        FeatureDocument::new("Login")
            .with_child(Background::new(["a registered user", "the login page"]))
            .with_child(Scenario::new(
                "Valid login",
                ["valid credentials", "submit", "dashboard"],
            ))
            .with_child(
                Scenario::new(
                    "Invalid login attempts",
                    ["<user>", "<password>", "submit", "error"],
                )
                .with_examples(Examples::with_row_count(2))
                .with_examples(Examples::with_row_count(3)),
            )
    }

    #[test]
    fn absent_document_yields_nothing() {
        assert!(extract(None).unwrap().is_empty());
    }

    #[test]
    fn weights_login_feature() {
        let records = extract(Some(&login())).unwrap();

        assert_eq!(
            records,
            [
                TestScenarioResult::new("Login", "Valid login", 5_u64),
                TestScenarioResult::new("Login", "Invalid login attempts", 30_u64),
            ],
        );
    }

    #[test]
    fn empty_feature_yields_nothing() {
        let doc = FeatureDocument::new("Empty");

        assert!(extract(Some(&doc)).unwrap().is_empty());
    }

    #[test]
    fn skips_non_scenario_children() {
        let doc = FeatureDocument {
            name: "Mixed".into(),
            children: vec![
                Scenario::new("first", ["a"]).into(),
                FeatureChild::Other,
                Background::new(["ignored", "too"]).into(),
                Scenario::new("second", ["b", "c"]).into(),
            ],
        };

        let records = extract(Some(&doc)).unwrap();

        assert_eq!(
            records,
            [
                TestScenarioResult::new("Mixed", "first", 1_u64),
                TestScenarioResult::new("Mixed", "second", 2_u64),
            ],
        );
    }

    #[test]
    fn duration_is_weight() {
        let record = TestScenarioResult::new("F", "S", 7_u64);

        assert_eq!(record.duration(), record.weight);
    }
}
