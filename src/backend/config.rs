//! Emission configuration for generated C++.

/// Emission configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Number of spaces per indentation level inside the entry point
    pub indent_width: usize,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

impl EmitConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// One indentation level as a string
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_indent_width() {
        assert_eq!(EmitConfig::default().indent_width, 4);
        assert_eq!(EmitConfig::new().indent_unit(), "    ");
    }

    #[test]
    fn test_with_indent_width() {
        let config = EmitConfig::new().with_indent_width(2);
        assert_eq!(config.indent_width, 2);
        assert_eq!(config.indent_unit(), "  ");
    }

    #[test]
    fn test_zero_indent() {
        assert_eq!(EmitConfig::new().with_indent_width(0).indent_unit(), "");
    }
}
