//! Log formatting helpers

use serde::Serialize;
use std::fmt::Debug;

/// Renders a value as YAML in log lines, on a fresh line.
///
/// ```ignore
/// trace!("fieldset spec: {}", Pretty(spec));
/// ```
///
/// Falls back to pretty `Debug` output if YAML serialization fails.
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> std::fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_yaml::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}
