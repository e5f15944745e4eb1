//! Filename classification
//!
//! Every file the walk produces falls into exactly one [`Classification`]:
//!
//! | Extension        | Name matches [`EPHEMERAL_PATTERN`] | Result      |
//! |------------------|------------------------------------|-------------|
//! | not `png`        | -                                  | `Ignored`   |
//! | `png` (any case) | yes                                | `Ephemeral` |
//! | `png` (any case) | no                                 | `Candidate` |
//!
//! Classification is decided from the name alone and never touches the
//! filesystem.

use std::fmt::{self, Display, Formatter};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::entry::FileEntry;

/// Generated preview thumbnails: `tpl`, exactly 13 ASCII digits, `.png`.
///
/// The match is anchored on both ends and case-sensitive, so `tpl<digits>.PNG`
/// is not ephemeral.
pub const EPHEMERAL_PATTERN: &str = r"^tpl[0-9]{13}\.png$";

/// The only extension eligible for pruning or promotion.
const IMAGE_EXTENSION: &str = "png";

/// What the reconciler does with a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Not a PNG; left untouched
    Ignored,
    /// Machine-generated preview; deleted in place
    Ephemeral,
    /// Original template asset; promoted into the library
    Candidate,
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Classification::Ignored => "ignored",
            Classification::Ephemeral => "ephemeral",
            Classification::Candidate => "candidate",
        };
        write!(f, "{s}")
    }
}

/// Classifier holding the compiled ephemeral-name pattern.
///
/// Build one per run and reuse it for every entry.
#[derive(Debug, Clone)]
pub struct Classifier {
    ephemeral: Regex,
}

impl Classifier {
    /// Compile [`EPHEMERAL_PATTERN`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            ephemeral: Regex::new(EPHEMERAL_PATTERN).expect("valid regex"),
        }
    }

    /// Returns true when `name` is a generated preview file name.
    #[must_use]
    pub fn is_ephemeral_name(&self, name: &str) -> bool {
        self.ephemeral.is_match(name)
    }

    /// Classify a file by its name and extension (without the leading dot).
    #[must_use]
    pub fn classify(&self, name: &str, extension: &str) -> Classification {
        if !extension.eq_ignore_ascii_case(IMAGE_EXTENSION) {
            return Classification::Ignored;
        }
        if self.is_ephemeral_name(name) {
            Classification::Ephemeral
        } else {
            Classification::Candidate
        }
    }

    /// Classify a walked entry.
    #[must_use]
    pub fn classify_entry(&self, entry: &FileEntry) -> Classification {
        self.classify(entry.name(), entry.extension())
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
