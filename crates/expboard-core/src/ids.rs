//! Compound identifiers.
//!
//! Entities are addressed by dot-joined unique names: a project is
//! `user.project`, a group is `user.project.group`. Parsing is purely
//! positional; no validation of the individual parts is done.

use crate::error::{ExpboardError, Result};

/// Split a unique name into its dot-separated parts.
pub fn split_unique_name(name: &str) -> Vec<&str> {
    name.split('.').collect()
}

fn parts(name: &str, expected: usize) -> Result<Vec<&str>> {
    let parts = split_unique_name(name);
    if parts.len() < expected {
        return Err(ExpboardError::InvalidUniqueName {
            name: name.to_string(),
            expected,
        });
    }
    Ok(parts)
}

/// A project unique name, `user.project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName {
    pub user: String,
    pub project: String,
}

impl ProjectName {
    pub fn parse(name: &str) -> Result<Self> {
        let parts = parts(name, 2)?;
        Ok(Self {
            user: parts[0].to_string(),
            project: parts[1].to_string(),
        })
    }
}

/// A group unique name, `user.project.group`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupName {
    pub user: String,
    pub project: String,
    pub group: u64,
}

impl GroupName {
    pub fn parse(name: &str) -> Result<Self> {
        let parts = parts(name, 3)?;
        let group = parts[2]
            .parse()
            .map_err(|_| ExpboardError::InvalidGroupId(parts[2].to_string()))?;
        Ok(Self {
            user: parts[0].to_string(),
            project: parts[1].to_string(),
            group,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_unique_name() {
        assert_eq!(split_unique_name("alice.proj1.7"), vec!["alice", "proj1", "7"]);
        assert_eq!(split_unique_name("alice"), vec!["alice"]);
    }

    #[test]
    fn test_project_name_parse() {
        let name = ProjectName::parse("alice.proj1").unwrap();
        assert_eq!(name.user, "alice");
        assert_eq!(name.project, "proj1");
    }

    #[test]
    fn test_project_name_too_short() {
        let err = ProjectName::parse("alice").unwrap_err();
        assert!(matches!(err, ExpboardError::InvalidUniqueName { expected: 2, .. }));
    }

    #[test]
    fn test_group_name_parse() {
        let name = GroupName::parse("alice.proj1.7").unwrap();
        assert_eq!(name.group, 7);
        assert_eq!(name.project, "proj1");
    }

    #[test]
    fn test_group_name_non_numeric() {
        let err = GroupName::parse("alice.proj1.seven").unwrap_err();
        assert!(matches!(err, ExpboardError::InvalidGroupId(ref g) if g == "seven"));
    }
}
