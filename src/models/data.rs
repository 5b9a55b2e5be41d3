//! Column-oriented data store
//!
//! Values are kept as the raw strings read from or written to the text
//! format. Typing happens at validation or export time.

use serde::{Deserialize, Serialize};

use crate::error::{BadcError, Result};

/// One named data column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    name: String,
    values: Vec<String>,
}

impl Variable {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn push(&mut self, value: String) {
        self.values.push(value);
    }
}

/// Ordered set of equal-length variables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataStore {
    variables: Vec<Variable>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. Its length must match the existing columns.
    pub fn add_variable(&mut self, name: impl Into<String>, values: Vec<String>) -> Result<()> {
        match self.variables.first() {
            Some(first) if first.len() != values.len() => {
                return Err(BadcError::DataShape {
                    expected: first.len(),
                    found: values.len(),
                });
            }
            _ => {}
        }
        self.variables.push(Variable::new(name, values));
        Ok(())
    }

    /// Append one value to every column
    ///
    /// On an empty store this creates one column per value, named
    /// `column_1`, `column_2`, ... in order.
    pub fn add_data_row(&mut self, values: Vec<String>) -> Result<()> {
        if self.variables.is_empty() {
            self.variables = values
                .into_iter()
                .enumerate()
                .map(|(i, v)| Variable::new(format!("column_{}", i + 1), vec![v]))
                .collect();
            return Ok(());
        }
        if values.len() != self.variables.len() {
            return Err(BadcError::DataShape {
                expected: self.variables.len(),
                found: values.len(),
            });
        }
        for (variable, value) in self.variables.iter_mut().zip(values) {
            variable.push(value);
        }
        Ok(())
    }

    /// Number of variables
    pub fn nvar(&self) -> usize {
        self.variables.len()
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.variables.first().map_or(0, Variable::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.variables.iter().map(Variable::name).collect()
    }

    /// Position of the named column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.variables.iter().position(|v| v.name() == name)
    }

    /// All values of one column
    pub fn get(&self, column: usize) -> Option<&[String]> {
        self.variables.get(column).map(Variable::values)
    }

    /// One value
    pub fn get_value(&self, column: usize, row: usize) -> Option<&str> {
        self.variables
            .get(column)
            .and_then(|v| v.values().get(row))
            .map(String::as_str)
    }

    /// Values across all columns at one row
    pub fn get_row(&self, row: usize) -> Option<Vec<&str>> {
        if row >= self.len() {
            return None;
        }
        Some(
            self.variables
                .iter()
                .map(|v| v.values()[row].as_str())
                .collect(),
        )
    }

    /// Iterator over every row in order
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        (0..self.len()).filter_map(move |i| self.get_row(i))
    }
}
