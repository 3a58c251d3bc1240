// Copyright (c) 2018-2023  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Structural view of a parsed [Gherkin] feature file.
//!
//! Only the parts relevant for step-count weighting are kept: names, step
//! counts and [`Examples`] body rows.
//!
//! [Gherkin]: https://cucumber.io/docs/gherkin/reference

use itertools::Itertools as _;

/// Parsed feature file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureDocument {
    /// Name of the feature.
    pub name: String,

    /// Children of the feature, in source order.
    pub children: Vec<FeatureChild>,
}

/// Direct child of a [`FeatureDocument`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeatureChild {
    /// [`Background`] steps of the feature.
    Background(Background),

    /// [`Scenario`] or [`Scenario Outline`][1].
    ///
    /// [1]: https://cucumber.io/docs/gherkin/reference#scenario-outline
    Scenario(Scenario),

    /// Anything else (e.g. a [`Rule`][1]), which doesn't contribute weight.
    ///
    /// [1]: https://cucumber.io/docs/gherkin/reference#rule
    Other,
}

/// Steps implicitly prepended to every [`Scenario`] of a feature.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Background {
    /// Step texts, in source order.
    pub steps: Vec<String>,
}

/// Single scenario, possibly templated by [`Examples`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scenario {
    /// Name of the scenario.
    pub name: String,

    /// Free-form description following the scenario keyword line.
    pub description: Option<String>,

    /// Step texts, in source order.
    pub steps: Vec<String>,

    /// [`Examples`] blocks. Empty for a plain scenario.
    pub examples: Vec<Examples>,
}

/// Data table of a [`Scenario Outline`][1].
///
/// [1]: https://cucumber.io/docs/gherkin/reference#scenario-outline
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Examples {
    /// Body rows of the table, header excluded.
    pub rows: Vec<Vec<String>>,
}

impl FeatureDocument {
    /// Creates a new empty [`FeatureDocument`] with the given `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Appends the given `child` to this [`FeatureDocument`].
    #[must_use]
    pub fn with_child(mut self, child: impl Into<FeatureChild>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Number of [`Background`] steps applying to every [`Scenario`] of this
    /// [`FeatureDocument`].
    ///
    /// Only a [`Background`] being the very first child is honored.
    #[must_use]
    pub fn background_step_count(&self) -> usize {
        match self.children.first() {
            Some(FeatureChild::Background(bg)) => bg.steps.len(),
            Some(FeatureChild::Scenario(_) | FeatureChild::Other) | None => 0,
        }
    }

    /// Iterates over the [`Scenario`]s of this [`FeatureDocument`], in
    /// source order.
    pub fn scenarios(&self) -> impl Iterator<Item = &Scenario> {
        self.children.iter().filter_map(|child| match child {
            FeatureChild::Scenario(sc) => Some(sc),
            FeatureChild::Background(_) | FeatureChild::Other => None,
        })
    }
}

impl Background {
    /// Creates a [`Background`] out of the given `steps`.
    #[must_use]
    pub fn new<S: Into<String>>(steps: impl IntoIterator<Item = S>) -> Self {
        Self {
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }
}

impl Scenario {
    /// Creates a plain [`Scenario`] with the given `name` and `steps`.
    #[must_use]
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        steps: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            steps: steps.into_iter().map(Into::into).collect(),
            examples: Vec::new(),
        }
    }

    /// Attaches the given [`Examples`] block, turning this [`Scenario`] into
    /// an outline.
    #[must_use]
    pub fn with_examples(mut self, examples: Examples) -> Self {
        self.examples.push(examples);
        self
    }

    /// Indicates whether this [`Scenario`] is a [`Scenario Outline`][1].
    ///
    /// [1]: https://cucumber.io/docs/gherkin/reference#scenario-outline
    #[must_use]
    pub fn is_outline(&self) -> bool {
        !self.examples.is_empty()
    }
}

impl Examples {
    /// Creates [`Examples`] with `count` empty body rows.
    #[must_use]
    pub fn with_row_count(count: usize) -> Self {
        Self {
            rows: vec![Vec::new(); count],
        }
    }
}

impl From<Background> for FeatureChild {
    fn from(bg: Background) -> Self {
        Self::Background(bg)
    }
}

impl From<Scenario> for FeatureChild {
    fn from(sc: Scenario) -> Self {
        Self::Scenario(sc)
    }
}

impl From<gherkin::Feature> for FeatureDocument {
    /// [`gherkin`] keeps backgrounds, scenarios and rules apart, so their
    /// source order is restored by span.
    fn from(feature: gherkin::Feature) -> Self {
        let background = feature
            .background
            .map(|bg| (bg.span.start, FeatureChild::Background(bg.into())));
        let scenarios = feature
            .scenarios
            .into_iter()
            .map(|sc| (sc.span.start, FeatureChild::Scenario(sc.into())));
        let rules = feature
            .rules
            .into_iter()
            .map(|r| (r.span.start, FeatureChild::Other));

        Self {
            name: feature.name,
            children: background
                .into_iter()
                .chain(scenarios)
                .chain(rules)
                .sorted_by_key(|(start, _)| *start)
                .map(|(_, child)| child)
                .collect(),
        }
    }
}

impl From<gherkin::Background> for Background {
    fn from(bg: gherkin::Background) -> Self {
        Self::new(bg.steps.into_iter().map(|s| s.value))
    }
}

impl From<gherkin::Scenario> for Scenario {
    fn from(sc: gherkin::Scenario) -> Self {
        Self {
            name: sc.name,
            description: sc.description,
            steps: sc.steps.into_iter().map(|s| s.value).collect(),
            examples: sc.examples.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<gherkin::Examples> for Examples {
    /// An [`Examples`] block without a table has no rows.
    fn from(ex: gherkin::Examples) -> Self {
        let rows = ex
            .table
            .map(|t| t.rows.into_iter().skip(1).collect())
            .unwrap_or_default();
        Self { rows }
    }
}
