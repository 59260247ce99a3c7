//! Roster loading functionality.
//!
//! This module provides the [`RosterLoader`] type for reading employee
//! wage data from JSON.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::SubsidiaryRoster;

/// Sample roster shipped with the crate, relative to the repository root.
pub const DEFAULT_ROSTER_PATH: &str = "data/employees_data.json";

/// Reads a [`SubsidiaryRoster`] from JSON.
///
/// # File Format
///
/// ```json
/// {
///   "TechCorp": [
///     {"name": "Alice", "job": "Engineer", "hourly_rate": 20,
///      "weekly_hours_worked": 35, "contract_hours": 40}
///   ],
///   "DesignWorks": []
/// }
/// ```
///
/// Subsidiary order in the file is kept. Wage fields may be omitted.
///
/// # Example
///
/// ```no_run
/// use salary_stats::data::RosterLoader;
///
/// let roster = RosterLoader::load("./data/employees_data.json")?;
/// println!("Loaded {} subsidiaries", roster.len());
/// # Ok::<(), salary_stats::error::PayrollError>(())
/// ```
pub struct RosterLoader;

impl RosterLoader {
    /// Loads a roster from a JSON file.
    ///
    /// # Returns
    ///
    /// Returns the roster on success, or an error if:
    /// - The file is missing (`DataNotFound`)
    /// - The content is not a valid roster (`DataParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<SubsidiaryRoster> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::DataNotFound {
            path: path_str.clone(),
        })?;

        let roster = Self::parse_from(&content, &path_str)?;

        debug!(
            path = %path_str,
            subsidiaries = roster.len(),
            employees = roster.values().map(Vec::len).sum::<usize>(),
            "Loaded employee roster"
        );
        Ok(roster)
    }

    /// Parses a roster from JSON text.
    pub fn parse(content: &str) -> PayrollResult<SubsidiaryRoster> {
        Self::parse_from(content, "<inline>")
    }

    fn parse_from(content: &str, source: &str) -> PayrollResult<SubsidiaryRoster> {
        let roster: SubsidiaryRoster =
            serde_json::from_str(content).map_err(|e| PayrollError::DataParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        Self::validate_from(&roster, source)?;
        Ok(roster)
    }

    /// Checks a roster that was deserialized elsewhere (e.g. from a request body).
    ///
    /// Every employee must have a non-blank name.
    pub fn validate(roster: &SubsidiaryRoster) -> PayrollResult<()> {
        Self::validate_from(roster, "<inline>")
    }

    fn validate_from(roster: &SubsidiaryRoster, source: &str) -> PayrollResult<()> {
        for (subsidiary, records) in roster.iter() {
            if let Some(position) = records.iter().position(|r| r.name.trim().is_empty()) {
                return Err(PayrollError::DataParseError {
                    path: source.to_string(),
                    message: format!(
                        "employee #{} in '{}' has an empty name",
                        position, subsidiary
                    ),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;

    #[test]
    fn test_parse_roster_preserves_order() {
        let json = r#"{
            "ProjectLead": [{"name": "Zoe", "job": "Lead", "hourly_rate": 30, "weekly_hours_worked": 40, "contract_hours": 40}],
            "DesignWorks": [],
            "TechCorp": [
                {"name": "Alice", "job": "Engineer", "hourly_rate": 20, "weekly_hours_worked": 35, "contract_hours": 40},
                {"name": "Bob", "job": "Engineer", "hourly_rate": "20.50", "weekly_hours_worked": 45, "contract_hours": 40}
            ]
        }"#;

        let roster = RosterLoader::parse(json).unwrap();

        let names: Vec<&str> = roster.names().collect();
        assert_eq!(names, vec!["ProjectLead", "DesignWorks", "TechCorp"]);
        let tech = roster.get("TechCorp").unwrap();
        assert_eq!(tech[1].hourly_rate, Some(Decimal::new(2050, 2)));
    }

    #[test]
    fn test_load_shipped_sample() {
        let roster = RosterLoader::load(DEFAULT_ROSTER_PATH).unwrap();
        assert_eq!(roster.len(), 3);
        assert!(roster.contains("TechCorp"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"A": [{{"name": "x", "job": "y", "hourly_rate": 1}}]}}"#).unwrap();

        let roster = RosterLoader::load(file.path()).unwrap();
        assert_eq!(roster.get("A").unwrap()[0].hourly_rate, Some(Decimal::ONE));
    }

    #[test]
    fn test_missing_file_returns_data_not_found() {
        let result = RosterLoader::load("/nonexistent/employees.json");
        assert!(matches!(result, Err(PayrollError::DataNotFound { .. })));
    }

    #[test]
    fn test_malformed_json_returns_parse_error() {
        let result = RosterLoader::parse("{not json");
        assert!(matches!(
            result,
            Err(PayrollError::DataParseError { path, .. }) if path == "<inline>"
        ));
    }

    #[test]
    fn test_wrong_shape_returns_parse_error() {
        let result = RosterLoader::parse(r#"{"TechCorp": {"name": "Alice"}}"#);
        assert!(matches!(result, Err(PayrollError::DataParseError { .. })));
    }

    #[test]
    fn test_duplicate_subsidiary_returns_parse_error() {
        let result = RosterLoader::parse(r#"{"A": [], "A": []}"#);
        match result {
            Err(PayrollError::DataParseError { message, .. }) => {
                assert!(message.contains("duplicate subsidiary 'A'"));
            }
            other => panic!("expected DataParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_name_returns_parse_error() {
        let result = RosterLoader::parse(r#"{"A": [{"name": "ok"}, {"name": "  "}]}"#);
        match result {
            Err(PayrollError::DataParseError { message, .. }) => {
                assert_eq!(message, "employee #1 in 'A' has an empty name");
            }
            other => panic!("expected DataParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_object_is_an_empty_roster() {
        let roster = RosterLoader::parse("{}").unwrap();
        assert!(roster.is_empty());
    }
}
