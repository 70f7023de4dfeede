//! Grid bucket check
//!
//! Answers the question a grid cell asks: does this character's value for a column fall
//! in the given bucket (`15-19`, `190cm+`, `Leaf`, ...)?

use crate::core::{CandidateRecord, satisfies};
use crate::engine::Game;

/// Result of checking one character against one bucket
pub struct CheckResult {
    pub record: CandidateRecord,
    pub attribute: String,
    pub value: String,
    pub bucket: String,
    pub satisfied: bool,
}

/// Check whether `name`'s value for `attribute` falls in `bucket`
///
/// # Errors
///
/// Returns an error if:
/// - The name is not part of the series
/// - The series has no attribute column with that name
pub fn check_bucket(
    game: &Game,
    name: &str,
    attribute: &str,
    bucket: &str,
) -> Result<CheckResult, String> {
    let record = game
        .lookup(name)
        .ok_or_else(|| format!("'{name}' is not in {}", game.name()))?;

    let (index, spec) = game
        .specs()
        .iter()
        .enumerate()
        .find(|(_, spec)| spec.name().eq_ignore_ascii_case(attribute.trim()))
        .ok_or_else(|| {
            let columns: Vec<&str> = game.specs().iter().map(|spec| spec.name()).collect();
            format!(
                "Unknown attribute '{attribute}' (columns: {})",
                columns.join(", ")
            )
        })?;

    let value = record.attribute(index).to_string();
    let satisfied = satisfies(&value, bucket, spec);

    Ok(CheckResult {
        record: record.clone(),
        attribute: spec.name().to_string(),
        value,
        bucket: bucket.to_string(),
        satisfied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::Series;

    #[test]
    fn age_bucket() {
        let game = Series::Naruto.load().unwrap();
        assert!(check_bucket(&game, "Gaara", "age", "15-19").unwrap().satisfied);
        assert!(!check_bucket(&game, "Kakashi Hatake", "Age", "15-19").unwrap().satisfied);
        assert!(check_bucket(&game, "Tsunade", "Age", "50+").unwrap().satisfied);
        assert!(check_bucket(&game, "Kakashi Hatake", "Age", "- 49").unwrap().satisfied);
    }

    #[test]
    fn unknown_age_never_fits() {
        let game = Series::Naruto.load().unwrap();
        let result = check_bucket(&game, "Kurotsuchi", "Age", "- 49").unwrap();
        assert_eq!(result.value, "unknown");
        assert!(!result.satisfied);
    }

    #[test]
    fn height_and_village_buckets() {
        let game = Series::Naruto.load().unwrap();
        assert!(check_bucket(&game, "Jiraiya", "Height", "190cm+").unwrap().satisfied);
        assert!(check_bucket(&game, "Shikamaru Nara", "Height", "170-180cm").unwrap().satisfied);
        assert!(check_bucket(&game, "Mei Terumi", "Village", "mist").unwrap().satisfied);
    }

    #[test]
    fn unknown_attribute_lists_columns() {
        let game = Series::Naruto.load().unwrap();
        let err = check_bucket(&game, "Gaara", "Clan", "Sand").err().unwrap();
        assert!(err.contains("Age, Height, Rank, Village, Nature"));
    }
}
