//! Conversion options

/// Horizontal distance between nodes on one row
pub const DEFAULT_COLUMN_SPACING: i64 = 250;

/// Vertical distance between rows
pub const DEFAULT_ROW_SPACING: i64 = 150;

/// Options controlling conversion output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    /// Canvas grid used to position nodes
    pub layout: GridLayout,

    /// Values written for synthetic authentication headers
    pub auth_header_values: AuthHeaderValues,
}

impl ConvertOptions {
    pub fn with_layout(mut self, layout: GridLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_auth_header_values(mut self, values: AuthHeaderValues) -> Self {
        self.auth_header_values = values;
        self
    }
}

/// Grid layout: one row per path, one column per method on that path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub column_spacing: i64,
    pub row_spacing: i64,
}

impl GridLayout {
    /// Canvas position of a grid cell
    pub fn position(&self, column: usize, row: usize) -> [i64; 2] {
        [
            column as i64 * self.column_spacing,
            row as i64 * self.row_spacing,
        ]
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            column_spacing: DEFAULT_COLUMN_SPACING,
            row_spacing: DEFAULT_ROW_SPACING,
        }
    }
}

/// How synthetic authentication headers are valued in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthHeaderValues {
    /// Every header entry carries the empty placeholder value
    #[default]
    Blank,

    /// Auth headers carry their credential template, e.g. `Bearer {{token}}`
    Templated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let layout = GridLayout::default();
        assert_eq!(layout.position(0, 0), [0, 0]);
        assert_eq!(layout.position(1, 0), [250, 0]);
        assert_eq!(layout.position(2, 3), [500, 450]);
    }

    #[test]
    fn test_builder() {
        let options = ConvertOptions::default()
            .with_auth_header_values(AuthHeaderValues::Templated)
            .with_layout(GridLayout {
                column_spacing: 300,
                row_spacing: 200,
            });

        assert_eq!(options.auth_header_values, AuthHeaderValues::Templated);
        assert_eq!(options.layout.position(1, 1), [300, 200]);
    }
}
