//! The fixed set of scenario categories.
//!
//! Categories are stored as their canonical (Chinese) label. The server does
//! not reject unknown values; clients resolve anything unrecognised to
//! [`Category::Other`] for display and filtering.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "数据处理")]
    DataProcessing,
    #[serde(rename = "自动化")]
    Automation,
    #[serde(rename = "分析预测")]
    Analytics,
    #[serde(rename = "文档生成")]
    DocumentGeneration,
    #[serde(rename = "其他")]
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::DataProcessing,
        Category::Automation,
        Category::Analytics,
        Category::DocumentGeneration,
        Category::Other,
    ];

    /// Canonical stored value.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::DataProcessing => "数据处理",
            Category::Automation => "自动化",
            Category::Analytics => "分析预测",
            Category::DocumentGeneration => "文档生成",
            Category::Other => "其他",
        }
    }

    /// English display label.
    pub fn english_label(self) -> &'static str {
        match self {
            Category::DataProcessing => "Data Processing",
            Category::Automation => "Automation",
            Category::Analytics => "Analytics & Forecasting",
            Category::DocumentGeneration => "Document Generation",
            Category::Other => "Other",
        }
    }

    /// Resolve a stored category string, falling back to `Other`.
    pub fn from_stored(value: &str) -> Category {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == value.trim())
            .unwrap_or(Category::Other)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
