//! Known review statuses and the text shown to the student.

/// Review status of a submission as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    pub const ALL: [ReviewStatus; 3] = [
        ReviewStatus::Approved,
        ReviewStatus::Reviewing,
        ReviewStatus::Rejected,
    ];

    /// Look up a status by its API code. Matching is exact.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    pub fn code(self) -> &'static str {
        match self {
            ReviewStatus::Approved => "approved",
            ReviewStatus::Reviewing => "reviewing",
            ReviewStatus::Rejected => "rejected",
        }
    }

    /// Human-readable verdict for the notification.
    pub fn verdict(self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            ReviewStatus::Reviewing => "Работа взята на проверку ревьюером.",
            ReviewStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}
