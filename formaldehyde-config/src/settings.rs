//! Layout settings shared by every form in the process

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::ConfigResult;

/// Columns in the rendering grid unless the application configures another grid.
pub const DEFAULT_GRID_COLUMNS: u32 = 12;

/// Column width of a field when its line declares no layout.
pub const DEFAULT_FIELD_COLUMN_SIZE: u32 = 6;

/// Label width of the first field of a line when its line declares no labels.
pub const FIRST_LABEL_COLUMN_SIZE: u32 = 2;

/// Label width of the second and later fields of a line when its line
/// declares no labels. The first field uses [`FIRST_LABEL_COLUMN_SIZE`].
pub const LABEL_COLUMN_SIZE: u32 = 1;

/// Default column widths used when a fieldset line leaves them unspecified.
///
/// Any key may be omitted in a configuration file; omitted keys keep their
/// built-in default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Width of the grid; every declared or default width must fit inside it.
    pub grid_columns: u32,
    pub default_field_column_size: u32,
    pub first_label_column_size: u32,
    /// Applies to every field after the first on a line.
    pub label_column_size: u32,
}

impl LayoutSettings {
    /// Label width for the field at `position` within its line.
    pub fn default_label_size(&self, position: usize) -> u32 {
        if position == 0 {
            self.first_label_column_size
        } else {
            self.label_column_size
        }
    }

    /// Check that the grid is non-empty and every default fits inside it.
    ///
    /// Label widths may be 0, which hosts use to hide labels.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.grid_columns == 0 {
            return Err(ConfigError::ValidationError {
                message: "grid_columns must be at least 1".to_string(),
            });
        }
        let widths = [
            ("default_field_column_size", self.default_field_column_size, 1),
            ("first_label_column_size", self.first_label_column_size, 0),
            ("label_column_size", self.label_column_size, 0),
        ];
        for (key, value, min) in widths {
            if !(min..=self.grid_columns).contains(&value) {
                return Err(ConfigError::invalid_width(key, value, min, self.grid_columns));
            }
        }
        Ok(())
    }

    pub fn with_grid_columns(mut self, columns: u32) -> Self {
        self.grid_columns = columns;
        self
    }

    pub fn with_default_field_column_size(mut self, size: u32) -> Self {
        self.default_field_column_size = size;
        self
    }

    pub fn with_first_label_column_size(mut self, size: u32) -> Self {
        self.first_label_column_size = size;
        self
    }

    pub fn with_label_column_size(mut self, size: u32) -> Self {
        self.label_column_size = size;
        self
    }
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            grid_columns: DEFAULT_GRID_COLUMNS,
            default_field_column_size: DEFAULT_FIELD_COLUMN_SIZE,
            first_label_column_size: FIRST_LABEL_COLUMN_SIZE,
            label_column_size: LABEL_COLUMN_SIZE,
        }
    }
}
