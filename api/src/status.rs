/// Status vocabulary at the data-model boundary.
///
/// Storage keeps the raw free text for backward compatibility; anything
/// outside the canonical set parses into `Legacy`, so pre-existing values
/// keep flowing through unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordStatus {
    Pending,
    Approved,
    Rejected,
    Legacy(String),
}

impl RecordStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            s if s.eq_ignore_ascii_case("pending") => RecordStatus::Pending,
            s if s.eq_ignore_ascii_case("approved") => RecordStatus::Approved,
            s if s.eq_ignore_ascii_case("rejected") => RecordStatus::Rejected,
            _ => RecordStatus::Legacy(raw.to_string()),
        }
    }

    /// Aggregation bucket key. Blank legacy values collapse into "Unknown".
    pub fn bucket(&self) -> &str {
        match self {
            RecordStatus::Pending => "Pending",
            RecordStatus::Approved => "Approved",
            RecordStatus::Rejected => "Rejected",
            RecordStatus::Legacy(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    "Unknown"
                } else {
                    trimmed
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RecordStatus;

    #[test]
    fn canonical_values_parse_case_insensitively() {
        assert_eq!(RecordStatus::parse("Pending"), RecordStatus::Pending);
        assert_eq!(RecordStatus::parse("approved "), RecordStatus::Approved);
        assert_eq!(RecordStatus::parse("REJECTED"), RecordStatus::Rejected);
    }

    #[test]
    fn unknown_text_is_preserved_as_legacy() {
        let status = RecordStatus::parse("On Hold");
        assert_eq!(status, RecordStatus::Legacy("On Hold".into()));
        assert_eq!(status.bucket(), "On Hold");
    }

    #[test]
    fn blank_status_buckets_as_unknown() {
        assert_eq!(RecordStatus::parse("").bucket(), "Unknown");
        assert_eq!(RecordStatus::parse("   ").bucket(), "Unknown");
    }
}
