// Copyright (c) 2018-2023  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Default [`Parser`] implementation.

use std::{
    io,
    path::{Path, PathBuf},
    vec,
};

use itertools::Itertools as _;

use crate::{
    document::FeatureDocument,
    error::{Error, Result},
    Parser,
};

/// Default [`Parser`].
///
/// A file path is parsed as a single `.feature` file, while a directory path
/// is walked recursively for `.feature` files, in sorted path order.
#[derive(Clone, Debug, Default)]
pub struct Basic {
    /// [Gherkin] dialect to parse files with. English, if [`None`].
    ///
    /// [Gherkin]: https://cucumber.io/docs/gherkin/reference
    language: Option<String>,
}

impl Basic {
    /// Creates a new [`Basic`] [`Parser`] of English [Gherkin] files.
    ///
    /// [Gherkin]: https://cucumber.io/docs/gherkin/reference
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [Gherkin] dialect to parse files with.
    ///
    /// # Errors
    ///
    /// If the `language` isn't supported by [`gherkin`].
    ///
    /// [Gherkin]: https://cucumber.io/docs/gherkin/reference
    pub fn language(mut self, language: impl Into<String>) -> Result<Self> {
        let language = language.into();
        if gherkin::GherkinEnv::new(&language).is_err() {
            return Err(Error::Language { language });
        }
        self.language = Some(language);
        Ok(self)
    }

    /// Returns the configured [Gherkin] dialect, if any.
    ///
    /// [Gherkin]: https://cucumber.io/docs/gherkin/reference
    #[must_use]
    pub fn get_language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    fn env(&self) -> gherkin::GherkinEnv {
        // Validated in `Basic::language()`.
        self.language
            .as_deref()
            .map(gherkin::GherkinEnv::new)
            .and_then(std::result::Result::ok)
            .unwrap_or_default()
    }

    fn parse_file(&self, path: &Path) -> Result<FeatureDocument> {
        let feature = gherkin::Feature::parse_path(path, self.env())?;
        tracing::debug!(
            path = %path.display(),
            feature = %feature.name,
            "parsed feature file",
        );
        Ok(feature.into())
    }

    fn feature_files(dir: &Path) -> Result<Vec<PathBuf>> {
        let walker = globwalk::GlobWalkerBuilder::new(dir, "*.feature")
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                reading_error(dir, io::Error::new(io::ErrorKind::Other, e.to_string()))
            })?;

        let files = walker
            .map(|entry| {
                entry
                    .map(|e| e.into_path())
                    .map_err(|e| reading_error(dir, e.into()))
            })
            .collect::<Result<Vec<_>>>()?;
        for file in &files {
            tracing::trace!(path = %file.display(), "found feature file");
        }
        Ok(files.into_iter().sorted().collect())
    }
}

impl<I: AsRef<Path>> Parser<I> for Basic {
    type Output = vec::IntoIter<Result<FeatureDocument>>;

    fn parse(self, input: I) -> Self::Output {
        let input = input.as_ref();
        let path = match input.canonicalize() {
            Ok(p) => p,
            Err(e) => return vec![Err(reading_error(input, e))].into_iter(),
        };

        if path.is_file() {
            return vec![self.parse_file(&path)].into_iter();
        }
        match Self::feature_files(&path) {
            Ok(files) => files
                .iter()
                .map(|f| self.parse_file(f))
                .collect::<Vec<_>>()
                .into_iter(),
            Err(e) => vec![Err(e)].into_iter(),
        }
    }
}

fn reading_error(path: &Path, source: io::Error) -> Error {
    gherkin::ParseFileError::Reading {
        path: path.to_path_buf(),
        source,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::{document::FeatureChild, Error, Parser as _};

    use super::Basic;

    const LOGIN: &str = "Feature: Login\n\
                         \n\
                         \x20 Scenario: Valid login\n\
                         \x20   Given a user\n\
                         \x20   When they log in\n\
                         \x20   Then they see the dashboard\n";

    #[test]
    fn parses_single_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("login.feature");
        fs::write(&file, LOGIN).unwrap();

        let docs = Basic::new()
            .parse(&file)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].name, "Login");
        assert!(matches!(docs[0].children[0], FeatureChild::Scenario(_)));
    }

    #[test]
    fn walks_directory_in_path_order() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.feature"), "Feature: B\n").unwrap();
        fs::write(dir.path().join("nested/c.FEATURE"), "Feature: C\n")
            .unwrap();
        fs::write(dir.path().join("a.feature"), "Feature: A\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not gherkin").unwrap();

        let names = Basic::new()
            .parse(dir.path())
            .map(|doc| doc.unwrap().name)
            .collect::<Vec<_>>();

        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn missing_path_fails() {
        let dir = TempDir::new().unwrap();

        let res = Basic::new()
            .parse(dir.path().join("absent.feature"))
            .collect::<Result<Vec<_>, _>>();

        assert!(matches!(res, Err(Error::Parse(_))));
    }

    #[test]
    fn malformed_file_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("broken.feature");
        fs::write(&file, "this is not gherkin at all\n").unwrap();

        let res = Basic::new().parse(&file).collect::<Result<Vec<_>, _>>();

        assert!(matches!(res, Err(Error::Parse(_))));
    }

    #[test]
    fn parses_configured_language() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("login.feature");
        fs::write(
            &file,
            "Fonctionnalité: Connexion\n\
             \n\
             \x20 Scénario: Connexion valide\n\
             \x20   Soit un utilisateur\n",
        )
        .unwrap();

        let parser = Basic::new().language("fr").unwrap();
        assert_eq!(parser.get_language(), Some("fr"));
        let docs = parser.parse(&file).collect::<Result<Vec<_>, _>>().unwrap();

        assert_eq!(docs[0].name, "Connexion");
    }

    #[test]
    fn rejects_unknown_language() {
        let err = Basic::new().language("klingon-ish").unwrap_err();

        assert!(matches!(err, Error::Language { language } if language == "klingon-ish"));
    }
}
