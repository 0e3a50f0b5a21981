//! Data models for the portfolio page.
//!
//! Fixed page content (facts, labels, markers) and the small typed values
//! that flow between the page and the server.

use crate::error::{PortfolioError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Facts
// ============================================================================

pub const FACTS: [&str; 6] = [
    "I am left handed!",
    "I have an older brother named Humza!",
    "My favorite color is turquoise!",
    "I love photography!",
    "I would love to visit Japan someday!",
    "Growing up, I played soccer for four years!",
];

/// Inline style applied to a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub color: &'static str,
    pub font: &'static str,
}

pub const FACT_STYLE: TextStyle = TextStyle {
    color: "#023C40",
    font: "12px georgia",
};

// ============================================================================
// Comments
// ============================================================================

/// Prefix drawn in front of every rendered comment.
pub const COMMENT_MARKER: &str = "💬 ";

/// Form field the comment endpoint reads submitted text from.
pub const COMMENT_FORM_FIELD: &str = "text-input";

/// Query parameter carrying the comment limit.
pub const COMMENT_LIMIT_PARAM: &str = "commentlimit";

/// Visitor-supplied bound on how many comments the server returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommentLimit(pub u32);

impl CommentLimit {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for CommentLimit {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u32>()
            .map(CommentLimit)
            .map_err(|_| PortfolioError::InvalidLimit(s.to_string()))
    }
}

impl fmt::Display for CommentLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn render_comment(comment: &str) -> String {
    format!("{}{}", COMMENT_MARKER, comment)
}

// ============================================================================
// Locations
// ============================================================================

/// Decorative label for each location, keyed by its position in the
/// server's response. Rendered in this order.
pub const LOCATION_LABELS: [(&str, usize); 4] = [
    ("⛰️ Mountain: ", 0),
    ("🏖️ Beach: ", 1),
    ("🏙️ City: ", 2),
    ("🌲 Forest: ", 3),
];

pub const LOCATION_COUNT: usize = LOCATION_LABELS.len();
