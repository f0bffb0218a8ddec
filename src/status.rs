use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Health status of a single quantity or of the whole motor.
///
/// Variants are declared in severity order, so the derived `Ord` gives
/// `Normal < Warning < Danger` and the overall status of a reading set is
/// simply the maximum of its per-quantity statuses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Normal,
    Warning,
    Danger,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Normal => "normal",
            Status::Warning => "warning",
            Status::Danger => "danger",
        }
    }

    /// Numeric code used for the status gauge.
    pub fn code(self) -> i64 {
        match self {
            Status::Normal => 0,
            Status::Warning => 1,
            Status::Danger => 2,
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
