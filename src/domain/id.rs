//! Human-readable, prefixed entity identifiers.
//!
//! Every entity type owns one prefix. Most IDs take a random suffix;
//! classes use a zero-padded running counter (`CLS-001`) which the
//! caller must allocate inside a serializable transaction.

use rand::Rng;

use crate::config::{CLASS_NUMBER_WIDTH, ID_ALPHABET, ID_SUFFIX_LENGTH};
use crate::errors::{AppError, AppResult};

/// Entity kinds that receive generated identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityId {
    Class,
    Staff,
    Teacher,
    User,
    Student,
    Subject,
    Schedule,
    Attendance,
    StaffAttendance,
    Admission,
    Journal,
}

impl EntityId {
    /// Prefix including the trailing dash.
    pub fn prefix(self) -> &'static str {
        match self {
            EntityId::Class => "CLS-",
            EntityId::Staff => "STF-",
            EntityId::Teacher => "TCH-",
            EntityId::User => "USR-",
            EntityId::Student => "STD-",
            EntityId::Subject => "SUB-",
            EntityId::Schedule => "SCH-",
            EntityId::Attendance => "ATT-",
            EntityId::StaffAttendance => "SAT-",
            EntityId::Admission => "ADM-",
            EntityId::Journal => "JRN-",
        }
    }

    /// Generate an ID with a random alphanumeric suffix.
    pub fn generate(self) -> String {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..ID_SUFFIX_LENGTH)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();
        format!("{}{}", self.prefix(), suffix)
    }

    /// Next sequential ID after the highest numbered one in `existing`.
    ///
    /// IDs that don't carry this prefix followed by a number are ignored.
    pub fn next_sequential<'a, I>(self, existing: I) -> AppResult<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let prefix = self.prefix();
        let max = existing
            .into_iter()
            .filter_map(|id| id.strip_prefix(prefix)?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        let next = max
            .checked_add(1)
            .ok_or_else(|| AppError::internal(format!("{} counter exhausted", prefix)))?;

        Ok(format!("{}{:0width$}", prefix, next, width = CLASS_NUMBER_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_shape() {
        let id = EntityId::Staff.generate();
        assert!(id.starts_with("STF-"));
        let suffix = &id[4..];
        assert_eq!(suffix.len(), ID_SUFFIX_LENGTH);
        assert!(suffix
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(EntityId::User.generate(), EntityId::User.generate());
    }

    #[test]
    fn test_first_class_id() {
        assert_eq!(EntityId::Class.next_sequential(Vec::<&str>::new()).unwrap(), "CLS-001");
    }

    #[test]
    fn test_sequential_uses_numeric_max() {
        let existing = ["CLS-002", "CLS-010", "CLS-009"];
        assert_eq!(EntityId::Class.next_sequential(existing).unwrap(), "CLS-011");
    }

    #[test]
    fn test_sequential_ignores_foreign_ids() {
        let existing = ["CLS-004", "legacy-7", "CLS-abc"];
        assert_eq!(EntityId::Class.next_sequential(existing).unwrap(), "CLS-005");
    }

    #[test]
    fn test_sequential_grows_past_padding() {
        let existing = ["CLS-999"];
        assert_eq!(EntityId::Class.next_sequential(existing).unwrap(), "CLS-1000");
    }

    #[test]
    fn test_sequential_counter_overflow_is_an_error() {
        let existing = ["CLS-18446744073709551615"];
        let err = EntityId::Class.next_sequential(existing).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
