//! Supported actions.
//!
//! The set is a closed enum; names are matched case-insensitively.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::batch::{convert_directory, BatchReport};
use crate::error::{BatchResult, UnknownAction};
use crate::logs::log_success;

/// An action selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Convert every CSV file of a directory to the extended layout
    Convert,
}

/// Inputs shared by all actions.
#[derive(Debug, Clone)]
pub struct ActionOptions {
    /// Directory to work on
    pub dir: PathBuf,
    /// Where to write a JSON batch report, if anywhere
    pub report: Option<PathBuf>,
}

impl Action {
    /// Every supported action.
    pub const ALL: [Action; 1] = [Action::Convert];

    pub fn name(self) -> &'static str {
        match self {
            Action::Convert => "convert",
        }
    }

    /// Help line listing the action names, e.g. `action (convert)`.
    pub fn help() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(|a| a.name()).collect();
        format!("action ({})", names.join(", "))
    }

    pub async fn run(self, options: &ActionOptions) -> BatchResult<BatchReport> {
        match self {
            Action::Convert => {
                let report = convert_directory(&options.dir).await?;
                if let Some(path) = &options.report {
                    report.save(path)?;
                    log_success(format!("Report written to {}", path.display()));
                }
                Ok(report)
            }
        }
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("convert".parse::<Action>(), Ok(Action::Convert));
        assert_eq!("CONVERT".parse::<Action>(), Ok(Action::Convert));
        assert_eq!("Convert".parse::<Action>(), Ok(Action::Convert));
    }

    #[test]
    fn test_parse_rejects_unknown_and_partial() {
        assert_eq!(
            "export".parse::<Action>(),
            Err(UnknownAction("export".to_string()))
        );
        assert!("conv".parse::<Action>().is_err());
        assert!("convert ".parse::<Action>().is_err());
        assert!("".parse::<Action>().is_err());
    }

    #[test]
    fn test_help_lists_actions() {
        assert_eq!(Action::help(), "action (convert)");
        for action in Action::ALL {
            assert_eq!(action.to_string().parse::<Action>(), Ok(action));
        }
    }

    #[tokio::test]
    async fn test_convert_writes_report() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("panels.csv"),
            "Definition Name,Quantity\nWidget 10x20 1010,5\n",
        )
        .unwrap();
        let report_path = dir.path().join("report.json");

        let options = ActionOptions {
            dir: dir.path().to_path_buf(),
            report: Some(report_path.clone()),
        };
        let report = Action::Convert.run(&options).await.unwrap();

        assert_eq!(report.converted.len(), 1);
        assert!(report_path.exists());
        assert!(dir.path().join("panels_extended.csv").exists());
    }
}
