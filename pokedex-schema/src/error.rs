use std::fmt::Display;

use thiserror::Error;

/// An error for a payload that does not match the expected schema.
///
/// Collects every problem found, each prefixed with the path of the offending field.
#[derive(Debug, Default, Clone, PartialEq, Eq, Error)]
pub struct ValidationError {
    problems: Vec<String>,
}

impl ValidationError {
    /// Creates an error with a single problem at the given path.
    pub fn at<P, M>(path: P, message: M) -> Self
    where
        P: Display,
        M: Display,
    {
        Self::from_iter([format_problem(path, message)])
    }

    /// All problems.
    pub fn problems(&self) -> impl Iterator<Item = &str> {
        self.problems.iter().map(|s| s.as_str())
    }

    /// Checks if the problem list is empty.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub(crate) fn push<P, M>(&mut self, path: P, message: M)
    where
        P: Display,
        M: Display,
    {
        self.problems.push(format_problem(path, message));
    }

    pub(crate) fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

fn format_problem<P, M>(path: P, message: M) -> String
where
    P: Display,
    M: Display,
{
    let path = path.to_string();
    if path.is_empty() {
        message.to_string()
    } else {
        format!("{path}: {message}")
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed: {}", self.problems.join("; "))
    }
}

impl<S> FromIterator<S> for ValidationError
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            problems: iter.into_iter().map(|s| s.into()).collect(),
        }
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(error: serde_json::Error) -> Self {
        Self::from_iter([error.to_string()])
    }
}
