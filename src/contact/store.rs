//! In-memory submission store
//!
//! Append-only and process-local: everything is lost on restart.

use std::sync::{Mutex, PoisonError};

/// An accepted contact form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub whatsapp_number: String,
    pub message: String,
    /// RFC 3339 UTC timestamp
    pub submitted_at: String,
    pub source_ip: String,
}

/// Append-only list of accepted submissions
#[derive(Debug, Default)]
pub struct SubmissionStore {
    entries: Mutex<Vec<ContactSubmission>>,
}

impl SubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submission and return the new count
    pub fn append(&self, submission: ContactSubmission) -> usize {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.push(submission);
        entries.len()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of all submissions in arrival order
    #[cfg(test)]
    pub fn snapshot(&self) -> Vec<ContactSubmission> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: "john@example.com".to_string(),
            whatsapp_number: "+919876543210".to_string(),
            message: "I am interested in the bootcamp!".to_string(),
            submitted_at: "2026-01-01T00:00:00Z".to_string(),
            source_ip: "127.0.0.1".to_string(),
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let store = SubmissionStore::new();
        assert!(store.is_empty());
        assert_eq!(store.append(submission("first")), 1);
        assert_eq!(store.append(submission("second")), 2);
        let names: Vec<String> = store.snapshot().into_iter().map(|s| s.name).collect();
        assert_eq!(names, ["first", "second"]);
    }
}
