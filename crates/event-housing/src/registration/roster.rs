use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Set of employee identifiers allowed to register.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    employees: BTreeSet<String>,
}

impl Roster {
    pub fn new<I, S>(employees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            employees: employees
                .into_iter()
                .map(Into::into)
                .filter(|name: &String| !name.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, employee: &str) -> bool {
        self.employees.contains(employee)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Employees in sorted order, as shown in the form's selector.
    pub fn employees(&self) -> impl Iterator<Item = &str> {
        self.employees.iter().map(String::as_str)
    }
}

/// Source of the roster. Queried once per validation so edits show up without a restart.
pub trait RosterProvider: Send + Sync {
    fn known_employees(&self) -> Result<Roster, RosterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("roster unavailable: {0}")]
    Unavailable(String),
    #[error("unable to open roster {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed roster: {0}")]
    Csv(#[from] csv::Error),
}

/// Fixed roster held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticRoster {
    roster: Roster,
}

impl StaticRoster {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }
}

impl RosterProvider for StaticRoster {
    fn known_employees(&self) -> Result<Roster, RosterError> {
        Ok(self.roster.clone())
    }
}

/// Roster backed by a CSV file with an `employee` column, re-read on every query.
#[derive(Debug, Clone)]
pub struct CsvRoster {
    path: PathBuf,
}

impl CsvRoster {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Roster, RosterError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut employees = Vec::new();

        for row in csv_reader.deserialize::<RosterRow>() {
            employees.push(row?.employee);
        }

        Ok(Roster::new(employees))
    }
}

impl RosterProvider for CsvRoster {
    fn known_employees(&self) -> Result<Roster, RosterError> {
        let file = File::open(&self.path).map_err(|source| RosterError::Io {
            path: self.path.clone(),
            source,
        })?;
        Self::from_reader(file)
    }
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    employee: String,
}
