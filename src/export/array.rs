//! Array-model description of a document
//!
//! Describes a document the way an array-oriented format (netCDF and the
//! like) sees it: one dimension, typed variables along it, and attributes.
//! No array file I/O is done here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BadcError, Result};
use crate::models::{Document, MetadataQuery};

/// Element type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    Char,
    Int,
    Float,
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarType::Char => write!(f, "char"),
            ScalarType::Int => write!(f, "int"),
            ScalarType::Float => write!(f, "float"),
        }
    }
}

impl FromStr for ScalarType {
    type Err = BadcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "char" => Ok(ScalarType::Char),
            "int" => Ok(ScalarType::Int),
            "float" => Ok(ScalarType::Float),
            other => Err(BadcError::Precondition(format!(
                "Unknown column type: {}",
                other
            ))),
        }
    }
}

/// One attribute attached to a variable or to the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub values: Vec<String>,
}

/// A column seen as an array along the dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayVariable {
    pub name: String,
    pub scalar_type: ScalarType,
    pub values: Vec<String>,
    /// True for the coordinate column that defines the dimension
    pub is_dimension: bool,
    pub attributes: Vec<Attribute>,
}

/// Array-model view of a whole document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayDescription {
    /// Name of the single dimension (the coordinate column)
    pub dimension: String,
    pub length: usize,
    pub variables: Vec<ArrayVariable>,
    pub global_attributes: Vec<Attribute>,
}

impl ArrayDescription {
    /// Build the description
    ///
    /// The document needs exactly one coordinate column and a `type` record
    /// for every column.
    pub fn from_document(doc: &Document) -> Result<Self> {
        let dimension = match doc.coordinate_variables().as_slice() {
            [one] => one.to_string(),
            [] => {
                return Err(BadcError::Precondition(
                    "An array description needs a coordinate variable".to_string(),
                ));
            }
            many => {
                return Err(BadcError::Precondition(format!(
                    "An array description needs exactly one coordinate variable, found {}",
                    many.join(", ")
                )));
            }
        };

        let variables = doc
            .variables()
            .iter()
            .map(|variable| -> Result<ArrayVariable> {
                let name = variable.name();
                let declared = doc
                    .query(MetadataQuery::ByLabelAndColumn("type", name))
                    .first()
                    .copied()
                    .and_then(|r| r.first())
                    .ok_or_else(|| {
                        BadcError::Precondition(format!("Column {} has no type metadata", name))
                    })?;
                let attributes = doc
                    .query(MetadataQuery::ByColumnWildcard(name))
                    .into_iter()
                    .map(|r| Attribute {
                        name: r.label().to_string(),
                        values: r.values().to_vec(),
                    })
                    .collect();
                Ok(ArrayVariable {
                    name: name.to_string(),
                    scalar_type: declared.parse()?,
                    values: variable.values().to_vec(),
                    is_dimension: name == dimension,
                    attributes,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let global_attributes = doc
            .metadata()
            .global_records()
            .map(|r| Attribute {
                name: r.label().to_string(),
                values: r.values().to_vec(),
            })
            .collect();

        Ok(Self {
            dimension,
            length: doc.len(),
            variables,
            global_attributes,
        })
    }

    pub fn variable(&self, name: &str) -> Option<&ArrayVariable> {
        self.variables.iter().find(|v| v.name == name)
    }
}
