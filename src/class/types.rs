use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Visibility section a declaration belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Signal,
    Protected,
    Private,
}

impl Visibility {
    /// Total mapping from the raw section keyword; anything unrecognized
    /// is treated as private
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "public" => Visibility::Public,
            "signals" => Visibility::Signal,
            "protected" => Visibility::Protected,
            "private" => Visibility::Private,
            _ => Visibility::Private,
        }
    }

    /// The UML marker rendered in front of a declaration
    pub fn marker(&self) -> char {
        match self {
            Visibility::Public => '+',
            Visibility::Signal => '<',
            Visibility::Protected => '#',
            Visibility::Private => '-',
        }
    }
}

/// Whether a declaration is a data member or a callable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Field,
    Method,
}

/// One field or method extracted from a class body, in encounter order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    /// Visibility section the declaration appeared under
    pub visibility: Visibility,

    /// Field or method
    pub role: Role,

    /// Declared name; for methods this includes the parameter list
    pub name: String,

    /// Declared type or return type; empty for constructors and destructors
    pub type_name: String,
}

/// A located class: its name and the flattened text of its direct body
#[derive(Debug, Clone, PartialEq)]
pub struct ClassEntry {
    /// Bare class name with the keyword and base-class list stripped
    pub name: String,

    /// `;`-joined concatenation of the direct leaf children of the class
    /// scope; nested scopes are discarded by design
    pub body: String,
}

/// Fully classified class, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    /// Class name
    pub name: String,

    /// Visibility-tagged field and method records in encounter order
    pub declarations: Vec<Declaration>,
}

impl ClassSummary {
    /// Field declarations in encounter order
    pub fn fields(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter().filter(|d| d.role == Role::Field)
    }

    /// Method declarations in encounter order
    pub fn methods(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter().filter(|d| d.role == Role::Method)
    }
}

/// Configuration for the class body classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyOptions {
    /// Qualifier keywords carrying no meaning for the summary; removed
    /// from the body before declarations are split
    #[serde(default = "default_qualifiers")]
    pub qualifiers: Vec<String>,
}

fn default_qualifiers() -> Vec<String> {
    ["virtual", "const", "override", "explicit", "Q_OBJECT", "slots"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            qualifiers: default_qualifiers(),
        }
    }
}

impl ClassifyOptions {
    /// Load options from a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
