//! Guessable records and the pool they are drawn from
//!
//! A `CandidateRecord` is one character (or word) from a series dataset. Its identity is
//! the normalized key: the display name uppercased with every non-letter removed.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Maximum number of autocomplete suggestions returned by [`Pool::suggest`]
pub const SUGGESTION_LIMIT: usize = 5;

/// Error type for records that cannot join a pool
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Name '{0}' has no letters to form a key")]
    EmptyKey(String),
}

/// Derive the canonical identity for a display name
///
/// # Examples
/// ```
/// use fandle::core::normalize_key;
///
/// assert_eq!(normalize_key("Monkey D. Luffy"), "MONKEYDLUFFY");
/// assert_eq!(normalize_key("  rock-lee "), "ROCKLEE");
/// assert_eq!(normalize_key("Élise"), "ÉLISE");
/// assert_eq!(normalize_key("42"), "");
/// ```
#[must_use]
pub fn normalize_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect()
}

/// One guessable entity with its attribute values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    display_name: String,
    normalized_key: String,
    attributes: Vec<String>,
}

impl CandidateRecord {
    /// Create a record from a display name and its raw attribute values
    ///
    /// # Errors
    /// Returns `RecordError::EmptyKey` if the name contains no letters.
    ///
    /// # Examples
    /// ```
    /// use fandle::core::CandidateRecord;
    ///
    /// let gaara = CandidateRecord::new("Gaara", vec!["17".into(), "Sand".into()]).unwrap();
    /// assert_eq!(gaara.normalized_key(), "GAARA");
    /// assert_eq!(gaara.attribute(1), "Sand");
    ///
    /// assert!(CandidateRecord::new("???", Vec::new()).is_err());
    /// ```
    pub fn new(display_name: impl Into<String>, attributes: Vec<String>) -> Result<Self, RecordError> {
        let display_name = display_name.into().trim().to_string();
        let normalized_key = normalize_key(&display_name);

        if normalized_key.is_empty() {
            return Err(RecordError::EmptyKey(display_name));
        }

        Ok(Self {
            display_name,
            normalized_key,
            attributes,
        })
    }

    #[inline]
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[inline]
    #[must_use]
    pub fn normalized_key(&self) -> &str {
        &self.normalized_key
    }

    #[inline]
    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Raw value of the attribute column at `index`
    ///
    /// Returns an empty string for a column the record does not carry.
    #[inline]
    #[must_use]
    pub fn attribute(&self, index: usize) -> &str {
        self.attributes.get(index).map_or("", String::as_str)
    }

    /// Check whether two records denote the same entity
    #[inline]
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        self.normalized_key == other.normalized_key
    }
}

impl fmt::Display for CandidateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// Ordered set of records with unique identities
///
/// Order is significant: daily selection indexes into it.
#[derive(Debug, Clone, Default)]
pub struct Pool {
    records: Vec<CandidateRecord>,
    by_key: FxHashMap<String, usize>,
}

impl Pool {
    /// Build a pool, keeping the first record for each identity
    ///
    /// Returns the pool and the records that were dropped as duplicates.
    #[must_use]
    pub fn new(records: impl IntoIterator<Item = CandidateRecord>) -> (Self, Vec<CandidateRecord>) {
        let mut pool = Self::default();
        let mut duplicates = Vec::new();

        for record in records {
            if pool.by_key.contains_key(record.normalized_key()) {
                duplicates.push(record);
            } else {
                pool.by_key
                    .insert(record.normalized_key().to_string(), pool.records.len());
                pool.records.push(record);
            }
        }

        (pool, duplicates)
    }

    #[inline]
    #[must_use]
    pub fn records(&self) -> &[CandidateRecord] {
        &self.records
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by name, ignoring case, spacing and punctuation
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&CandidateRecord> {
        self.by_key
            .get(&normalize_key(name))
            .map(|&index| &self.records[index])
    }

    /// Records whose display name contains `fragment` (case-insensitive), in pool order
    ///
    /// At most [`SUGGESTION_LIMIT`] records are returned; an empty fragment suggests nothing.
    #[must_use]
    pub fn suggest(&self, fragment: &str) -> Vec<&CandidateRecord> {
        let needle = fragment.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.records
            .iter()
            .filter(|record| record.display_name().to_lowercase().contains(&needle))
            .take(SUGGESTION_LIMIT)
            .collect()
    }

    /// Sub-pool restricted to the given identities, preserving pool order
    #[must_use]
    pub fn restricted_to<'k>(&self, keys: impl IntoIterator<Item = &'k str>) -> Self {
        let wanted: Vec<&str> = keys.into_iter().collect();
        let (pool, _) = Self::new(
            self.records
                .iter()
                .filter(|record| wanted.contains(&record.normalized_key()))
                .cloned(),
        );
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> CandidateRecord {
        CandidateRecord::new(name, Vec::new()).unwrap()
    }

    #[test]
    fn key_strips_non_letters_and_uppercases() {
        assert_eq!(normalize_key("Naruto Uzumaki"), "NARUTOUZUMAKI");
        assert_eq!(normalize_key("Portgas D. Ace"), "PORTGASDACE");
        assert_eq!(normalize_key("A"), "A");
    }

    #[test]
    fn key_keeps_non_ascii_letters() {
        assert_eq!(normalize_key("Élise"), "ÉLISE");
        assert_eq!(normalize_key("Brûlée 2"), "BRÛLÉE");
        assert_ne!(normalize_key("Élise"), normalize_key("Lise"));

        let (pool, _) = Pool::new([record("Élise"), record("Lise")]);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.lookup("élise").unwrap().display_name(), "Élise");
    }

    #[test]
    fn record_rejects_empty_key() {
        assert!(matches!(
            CandidateRecord::new("  123 ", Vec::new()),
            Err(RecordError::EmptyKey(name)) if name == "123"
        ));
    }

    #[test]
    fn record_trims_display_name() {
        let r = record("  Temari ");
        assert_eq!(r.display_name(), "Temari");
        assert_eq!(format!("{r}"), "Temari");
    }

    #[test]
    fn missing_attribute_is_empty() {
        let r = CandidateRecord::new("Haku", vec!["15".into()]).unwrap();
        assert_eq!(r.attribute(0), "15");
        assert_eq!(r.attribute(3), "");
    }

    #[test]
    fn pool_drops_duplicate_identities() {
        let (pool, dropped) = Pool::new([record("Gaara"), record("GAARA!"), record("Temari")]);
        assert_eq!(pool.len(), 2);
        assert_eq!(dropped.len(), 1);
        assert_eq!(dropped[0].display_name(), "GAARA!");
        assert_eq!(pool.records()[1].display_name(), "Temari");
    }

    #[test]
    fn pool_lookup_is_normalized() {
        let (pool, _) = Pool::new([record("Rock Lee"), record("Might Guy")]);
        assert_eq!(pool.lookup("rock lee").unwrap().display_name(), "Rock Lee");
        assert_eq!(pool.lookup("MIGHT-GUY").unwrap().display_name(), "Might Guy");
        assert!(pool.lookup("Kakashi").is_none());
    }

    #[test]
    fn pool_suggest_matches_substring_in_order() {
        let (pool, _) = Pool::new(
            [
                "Sasuke Uchiha",
                "Itachi Uchiha",
                "Naruto Uzumaki",
                "Obito Uchiha",
                "Madara Uchiha",
                "Shisui Uchiha",
                "Izuna Uchiha",
            ]
            .into_iter()
            .map(record),
        );

        let names: Vec<&str> = pool
            .suggest("uchi")
            .into_iter()
            .map(CandidateRecord::display_name)
            .collect();
        assert_eq!(
            names,
            [
                "Sasuke Uchiha",
                "Itachi Uchiha",
                "Obito Uchiha",
                "Madara Uchiha",
                "Shisui Uchiha"
            ]
        );
        assert!(pool.suggest("   ").is_empty());
    }

    #[test]
    fn restricted_pool_keeps_order() {
        let (pool, _) = Pool::new([record("A"), record("B"), record("C")]);
        let sub = pool.restricted_to(["C", "A", "Z"]);
        let keys: Vec<&str> = sub.records().iter().map(CandidateRecord::normalized_key).collect();
        assert_eq!(keys, ["A", "C"]);
        assert_eq!(sub.lookup("c").unwrap().normalized_key(), "C");
    }
}
