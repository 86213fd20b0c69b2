//! Port abstraction for holding registered users.

use crate::record::UserRecord;

/// Port for the ordered collection of registered users.
#[cfg_attr(test, mockall::automock)]
pub trait UserStore {
    /// Appends a record after any already stored.
    fn insert(&mut self, record: UserRecord);

    /// Returns the stored records in insertion order.
    fn records(&self) -> &[UserRecord];
}

/// Process-local store backed by a `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryUserStore {
    records: Vec<UserRecord>,
}

impl InMemoryUserStore {
    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl UserStore for InMemoryUserStore {
    fn insert(&mut self, record: UserRecord) {
        self.records.push(record);
    }

    fn records(&self) -> &[UserRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::UserInput;

    #[test]
    fn records_preserve_insertion_order() {
        let mut store = InMemoryUserStore::default();
        store.insert(UserInput::new("Alice", "alice@test.com", "Secret99").into());
        store.insert(UserInput::new("Bob", "bob@test.com", "Secret98").into());

        let names: Vec<&str> = store.records().iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, ["Alice", "Bob"]);
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }
}
