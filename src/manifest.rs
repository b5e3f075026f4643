use anyhow::Result;
use indexmap::IndexMap;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Manifest {
    Package {
        dependencies: IndexMap<String, String>,
    },
    Application {
        dependencies: AppDependencies,
    },
}

#[derive(Deserialize, Debug)]
pub struct AppDependencies {
    pub direct: IndexMap<String, String>,
    pub indirect: IndexMap<String, String>,
}

impl FromStr for Manifest {
    type Err = anyhow::Error;

    fn from_str(data: &str) -> Result<Self> {
        let manifest: Manifest = serde_json::from_str(data)?;
        Ok(manifest)
    }
}

impl Manifest {
    pub fn from_reader<R>(reader: R) -> Result<Self>
    where
        R: std::io::Read,
    {
        let manifest: Manifest = serde_json::from_reader(reader)?;
        Ok(manifest)
    }

    /// Dependency identifiers in manifest order; for applications the
    /// direct dependencies come before the indirect ones.
    pub fn dependency_ids(&self) -> Vec<&str> {
        match self {
            Manifest::Package { dependencies } => {
                dependencies.keys().map(String::as_str).collect()
            }
            Manifest::Application { dependencies } => dependencies
                .direct
                .keys()
                .chain(dependencies.indirect.keys())
                .map(String::as_str)
                .collect(),
        }
    }
}

#[test]
fn test_parse_package_manifest() -> Result<()> {
    let sample = r#"{
    "type": "package",
    "name": "elm-community/list-extra",
    "summary": "Convenience functions for working with List",
    "license": "MIT",
    "version": "8.7.0",
    "exposed-modules": [
        "List.Extra"
    ],
    "elm-version": "0.19.0 <= v < 0.20.0",
    "dependencies": {
        "elm/core": "1.0.0 <= v < 2.0.0",
        "elm/random": "1.0.0 <= v < 2.0.0"
    },
    "test-dependencies": {
        "elm-explorations/test": "2.0.0 <= v < 3.0.0"
    }
}"#;

    let manifest = Manifest::from_str(sample)?;
    assert_eq!(manifest.dependency_ids(), vec!["elm/core", "elm/random"]);
    Ok(())
}

#[test]
fn test_parse_application_manifest() -> Result<()> {
    let sample = r#"{
    "type": "application",
    "source-directories": [
        "src"
    ],
    "elm-version": "0.19.1",
    "dependencies": {
        "direct": {
            "elm/browser": "1.0.2",
            "elm/core": "1.0.5",
            "elm/html": "1.0.0"
        },
        "indirect": {
            "elm/json": "1.1.3",
            "elm/time": "1.0.0",
            "elm/url": "1.0.0",
            "elm/virtual-dom": "1.0.3"
        }
    },
    "test-dependencies": {
        "direct": {},
        "indirect": {}
    }
}"#;

    let manifest = Manifest::from_str(sample)?;
    assert_eq!(
        manifest.dependency_ids(),
        vec![
            "elm/browser",
            "elm/core",
            "elm/html",
            "elm/json",
            "elm/time",
            "elm/url",
            "elm/virtual-dom",
        ]
    );
    Ok(())
}

#[test]
fn test_unrecognized_type_is_rejected() {
    let sample = r#"{ "type": "program", "dependencies": {} }"#;
    assert!(Manifest::from_str(sample).is_err());
}

#[test]
fn test_missing_type_is_rejected() {
    let sample = r#"{ "dependencies": { "elm/core": "1.0.5" } }"#;
    assert!(Manifest::from_str(sample).is_err());
}
