//! Book thickness, derived from the page count and never supplied by clients.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Books with at most this many pages are `thin`.
pub const THIN_MAX_PAGES: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Thickness {
    Thin,
    Thick,
}

impl Thickness {
    pub fn from_total_pages(total_page: i32) -> Self {
        if total_page <= THIN_MAX_PAGES {
            Thickness::Thin
        } else {
            Thickness::Thick
        }
    }

    /// Value stored in the `books.thickness` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Thickness::Thin => "thin",
            Thickness::Thick => "thick",
        }
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
