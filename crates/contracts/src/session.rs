use serde::{Deserialize, Serialize};

/// Display context governing price field and copy selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Retail,
    Wholesale,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Retail => Mode::Wholesale,
            Mode::Wholesale => Mode::Retail,
        }
    }

    /// Text shown on the navbar mode pill.
    pub fn switch_label(self) -> &'static str {
        match self {
            Mode::Retail => "RETAIL",
            Mode::Wholesale => "WHOLESALE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_retail() {
        assert_eq!(Mode::default(), Mode::Retail);
    }

    #[test]
    fn toggle_flips_both_ways() {
        assert_eq!(Mode::Retail.toggled(), Mode::Wholesale);
        assert_eq!(Mode::Wholesale.toggled(), Mode::Retail);
    }
}
