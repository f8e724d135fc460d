//! Display colors for token categories

use serde::{Deserialize, Serialize};

use crate::highlight::TokenCategory;

/// Hex color per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub keyword: String,
    pub control_flow: String,
    pub string: String,
    pub function: String,
    pub number: String,
    pub comment: String,
    pub type_name: String,
    pub default: String,
}

impl Palette {
    /// Dark editor palette
    pub fn dark() -> Self {
        Self {
            keyword: "#569CD6".to_string(),
            control_flow: "#C586C0".to_string(),
            string: "#CE9178".to_string(),
            function: "#DCDCAA".to_string(),
            number: "#B5CEA8".to_string(),
            comment: "#6A9955".to_string(),
            type_name: "#4EC9B0".to_string(),
            default: "#9CDCFE".to_string(),
        }
    }

    pub fn color(&self, category: TokenCategory) -> &str {
        match category {
            TokenCategory::Keyword => &self.keyword,
            TokenCategory::ControlFlow => &self.control_flow,
            TokenCategory::String => &self.string,
            TokenCategory::Function => &self.function,
            TokenCategory::Number => &self.number,
            TokenCategory::Comment => &self.comment,
            TokenCategory::Type => &self.type_name,
            TokenCategory::Default => &self.default,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}
