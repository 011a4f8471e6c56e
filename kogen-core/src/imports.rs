//! Import statement builder for the two module dialects a project can use.

use crate::config::{GeneratorConfig, TestFramework};

/// Left-hand side of an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignee {
    /// `import x from 'src'` / `const x = require('src')`
    Default(String),
    /// `import { a, b } from 'src'` / `const { a, b } = require('src')`
    Named(Vec<String>),
}

impl Assignee {
    pub fn default_binding(name: impl Into<String>) -> Self {
        Assignee::Default(name.into())
    }

    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Assignee::Named(names.into_iter().map(Into::into).collect())
    }
}

/// Build one import line.
///
/// With no assignee the result is a side-effect-only import.
pub fn make_import(assignee: Option<&Assignee>, source: &str, use_require: bool) -> String {
    let mut out = String::new();

    if let Some(assignee) = assignee {
        out.push_str(if use_require { "const " } else { "import " });
        match assignee {
            Assignee::Named(names) => {
                out.push_str("{ ");
                out.push_str(&names.join(", "));
                out.push_str(" }");
            }
            Assignee::Default(name) => out.push_str(name),
        }
        out.push_str(if use_require { " = " } else { " from " });
    }

    if use_require {
        out.push_str(&format!("require('{source}')"));
    } else {
        out.push_str(&format!("'{source}'"));
    }

    out
}

/// Import line for the assertion library of the configured test framework.
///
/// Frameworks without a known library produce no import.
pub fn test_env_import(config: &GeneratorConfig) -> Option<String> {
    match config.test_framework {
        TestFramework::Mocha => Some(make_import(
            Some(&Assignee::named(["expect"])),
            "chai",
            config.use_require_syntax,
        )),
        TestFramework::Tape => Some(make_import(
            Some(&Assignee::default_binding("test")),
            "tape",
            config.use_require_syntax,
        )),
        _ => None,
    }
}
