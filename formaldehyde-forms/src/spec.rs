//! Declarative fieldset descriptions
//!
//! A [`FieldsetSpec`] is an ordered list of fieldsets, each with an optional
//! legend and a set of options describing its lines. It is usually declared
//! in code with the builders, or read from YAML:
//!
//! ```yaml
//! - legend: ~
//!   fields: [[first_name, middle_name], last_name]
//!   layout: [[4, 6], 2]
//!   labels: [[1, 1], 10]
//!   classes: form-control
//! - legend: Address
//!   fields: [street]
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

/// One line of a fieldset: a single field or several side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineSpec {
    Single(String),
    Multi(Vec<String>),
}

impl LineSpec {
    /// Field names on this line, left to right.
    pub fn names(&self) -> &[String] {
        match self {
            LineSpec::Single(name) => std::slice::from_ref(name),
            LineSpec::Multi(names) => names,
        }
    }
}

impl From<&str> for LineSpec {
    fn from(name: &str) -> Self {
        LineSpec::Single(name.to_string())
    }
}

impl From<String> for LineSpec {
    fn from(name: String) -> Self {
        LineSpec::Single(name)
    }
}

impl<const N: usize> From<[&str; N]> for LineSpec {
    fn from(names: [&str; N]) -> Self {
        LineSpec::Multi(names.iter().map(|n| n.to_string()).collect())
    }
}

impl From<Vec<String>> for LineSpec {
    fn from(names: Vec<String>) -> Self {
        LineSpec::Multi(names)
    }
}

/// Column widths for one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WidthSpec {
    /// The same width for every field on the line.
    Line(u32),
    /// One width per field; fields past the end use the defaults.
    PerField(Vec<u32>),
}

impl WidthSpec {
    /// Explicit width for the field at `position`, if one is declared.
    pub fn width_at(&self, position: usize) -> Option<u32> {
        match self {
            WidthSpec::Line(width) => Some(*width),
            WidthSpec::PerField(widths) => widths.get(position).copied(),
        }
    }

    fn values(&self) -> &[u32] {
        match self {
            WidthSpec::Line(width) => std::slice::from_ref(width),
            WidthSpec::PerField(widths) => widths,
        }
    }
}

impl From<u32> for WidthSpec {
    fn from(width: u32) -> Self {
        WidthSpec::Line(width)
    }
}

impl<const N: usize> From<[u32; N]> for WidthSpec {
    fn from(widths: [u32; N]) -> Self {
        WidthSpec::PerField(widths.to_vec())
    }
}

impl From<Vec<u32>> for WidthSpec {
    fn from(widths: Vec<u32>) -> Self {
        WidthSpec::PerField(widths)
    }
}

/// Everything about a fieldset except its legend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldsetOptions {
    pub fields: Vec<LineSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Vec<WidthSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<WidthSpec>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub classes: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl FieldsetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn line(mut self, line: impl Into<LineSpec>) -> Self {
        self.fields.push(line.into());
        self
    }

    /// Append the layout widths of the next line.
    pub fn layout(mut self, widths: impl Into<WidthSpec>) -> Self {
        self.layout.get_or_insert_with(Vec::new).push(widths.into());
        self
    }

    /// Append the label widths of the next line.
    pub fn labels(mut self, widths: impl Into<WidthSpec>) -> Self {
        self.labels.get_or_insert_with(Vec::new).push(widths.into());
        self
    }

    pub fn classes(mut self, classes: impl Into<String>) -> Self {
        self.classes = classes.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A fieldset as declared: legend plus options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldsetDecl {
    #[serde(default)]
    pub legend: Option<String>,
    #[serde(flatten)]
    pub options: FieldsetOptions,
}

impl FieldsetDecl {
    fn label(&self) -> &str {
        self.legend.as_deref().unwrap_or("<untitled>")
    }
}

/// The ordered fieldsets declared for a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldsetSpec {
    fieldsets: Vec<FieldsetDecl>,
}

impl FieldsetSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fieldset.
    pub fn fieldset(mut self, legend: Option<&str>, options: FieldsetOptions) -> Self {
        self.fieldsets.push(FieldsetDecl {
            legend: legend.map(str::to_string),
            options,
        });
        self
    }

    /// Parse a spec from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let spec: FieldsetSpec = serde_yaml::from_str(yaml)?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldsetDecl> {
        self.fieldsets.iter()
    }

    pub fn len(&self) -> usize {
        self.fieldsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fieldsets.is_empty()
    }

    /// Every field name referenced, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fieldsets
            .iter()
            .flat_map(|decl| decl.options.fields.iter())
            .flat_map(|line| line.names().iter().map(String::as_str))
    }

    /// Reject fieldsets containing a line without fields.
    pub fn validate(&self) -> Result<()> {
        for (index, decl) in self.fieldsets.iter().enumerate() {
            if decl.options.fields.iter().any(|line| line.names().is_empty()) {
                return Err(FormError::invalid_spec(format!(
                    "fieldset {index} ({}) has a line without fields",
                    decl.label()
                )));
            }
        }
        Ok(())
    }

    /// Reject widths that do not fit a grid of `grid_columns` columns.
    ///
    /// Layout widths must be at least 1; a label width of 0 hides the label.
    pub fn validate_widths(&self, grid_columns: u32) -> Result<()> {
        for (index, decl) in self.fieldsets.iter().enumerate() {
            let ranges = [
                ("layout", 1, decl.options.layout.as_deref()),
                ("label", 0, decl.options.labels.as_deref()),
            ];
            for (kind, min, specs) in ranges {
                let widths = specs.into_iter().flatten().flat_map(WidthSpec::values);
                for &width in widths {
                    if !(min..=grid_columns).contains(&width) {
                        return Err(FormError::invalid_spec(format!(
                            "fieldset {index} ({}) has {kind} width {width} outside {min}..={grid_columns}",
                            decl.label()
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FieldsetSpec {
    type Item = &'a FieldsetDecl;
    type IntoIter = std::slice::Iter<'a, FieldsetDecl>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const PERSON_YAML: &str = r#"
- legend: ~
  fields:
    - [first_name, middle_name]
    - last_name
  layout: [[4, 6], 2]
  labels: [[1, 1], 10]
  classes: form-control
- legend: Address
  fields: [street]
"#;

    fn person_spec() -> FieldsetSpec {
        FieldsetSpec::new()
            .fieldset(
                None,
                FieldsetOptions::new()
                    .line(["first_name", "middle_name"])
                    .line("last_name")
                    .layout([4, 6])
                    .layout(2u32)
                    .labels([1, 1])
                    .labels(10u32)
                    .classes("form-control"),
            )
            .fieldset(Some("Address"), FieldsetOptions::new().line("street"))
    }

    #[test]
    fn test_yaml_matches_builder() {
        let parsed = FieldsetSpec::from_yaml(PERSON_YAML).unwrap();
        assert_eq!(parsed, person_spec());
    }

    #[test]
    fn test_untagged_shapes() {
        let parsed = FieldsetSpec::from_yaml(PERSON_YAML).unwrap();
        let first = parsed.iter().next().unwrap();
        assert_eq!(
            first.options.fields[0],
            LineSpec::Multi(vec!["first_name".into(), "middle_name".into()])
        );
        assert_eq!(first.options.fields[1], LineSpec::Single("last_name".into()));
        let layout = first.options.layout.as_ref().unwrap();
        assert_eq!(layout[0], WidthSpec::PerField(vec![4, 6]));
        assert_eq!(layout[1], WidthSpec::Line(2));
    }

    #[test]
    fn test_missing_optional_keys_default() {
        let parsed = FieldsetSpec::from_yaml(PERSON_YAML).unwrap();
        let address = parsed.iter().nth(1).unwrap();
        assert_eq!(address.legend.as_deref(), Some("Address"));
        assert!(address.options.layout.is_none());
        assert!(address.options.labels.is_none());
        assert_eq!(address.options.classes, "");
        assert_eq!(address.options.description, "");
    }

    #[test]
    fn test_field_names_in_order() {
        let spec = person_spec();
        let names: Vec<_> = spec.field_names().collect();
        assert_eq!(names, ["first_name", "middle_name", "last_name", "street"]);
    }

    #[test]
    fn test_width_at() {
        assert_eq!(WidthSpec::Line(3).width_at(5), Some(3));
        assert_eq!(WidthSpec::PerField(vec![4, 6]).width_at(1), Some(6));
        assert_eq!(WidthSpec::PerField(vec![4, 6]).width_at(2), None);
    }

    #[test]
    fn test_empty_line_is_invalid() {
        let spec = FieldsetSpec::new().fieldset(
            Some("Broken"),
            FieldsetOptions::new().line(Vec::<String>::new()),
        );
        let err = spec.validate().unwrap_err();
        assert!(matches!(err, FormError::InvalidSpec { .. }));
        assert!(err.to_string().contains("Broken"));
    }

    #[test]
    fn test_width_wider_than_grid_is_invalid() {
        let yaml = "- fields: [a, b]\n  layout: [[16, 8]]\n";
        let spec = FieldsetSpec::from_yaml(yaml).unwrap();
        let err = spec.validate_widths(12).unwrap_err();
        assert!(matches!(err, FormError::InvalidSpec { .. }));
        assert!(err.to_string().contains("layout width 16 outside 1..=12"));
        assert!(spec.validate_widths(16).is_ok());
    }

    #[rstest]
    #[case::zero_label("- fields: [a]\n  labels: [0]\n", true)]
    #[case::zero_layout("- fields: [a]\n  layout: [0]\n", false)]
    fn test_zero_width_only_allowed_for_labels(#[case] yaml: &str, #[case] valid: bool) {
        let spec = FieldsetSpec::from_yaml(yaml).unwrap();
        assert_eq!(spec.validate_widths(12).is_ok(), valid);
    }

    #[test]
    fn test_yaml_round_trip_keeps_structure() {
        let spec = person_spec();
        let yaml = spec.to_yaml().unwrap();
        assert!(yaml.contains("form-control"));
        assert!(!yaml.contains("description"));
        assert_eq!(FieldsetSpec::from_yaml(&yaml).unwrap(), spec);
    }
}
