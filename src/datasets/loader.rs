//! Dataset parsing and loading
//!
//! Character tables are comma-separated with a header row: the first column is the display
//! name, the remaining columns are attribute values in the series' column order. Word
//! lists hold one word per line. Grid rules hold one category per line: its name, then
//! its bucket values. Fields are not quoted.

use super::DatasetError;
use crate::core::{AttributeSpec, CandidateRecord, Pool};
use crate::engine::GridRules;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Parse a character table into a pool
///
/// The header must name the same attribute columns as `specs`, in order (case-insensitive).
/// Short rows are padded with empty values, long rows are truncated, and rows without a
/// usable name or with a duplicate identity are skipped.
///
/// # Errors
/// Returns `DatasetError::MissingHeader` for an empty table and
/// `DatasetError::ColumnMismatch` if the header does not match `specs`.
///
/// # Examples
/// ```
/// use fandle::core::AttributeSpec;
/// use fandle::datasets::loader::parse_table;
///
/// let specs = [AttributeSpec::numeric("Age"), AttributeSpec::exact("Village")];
/// let pool = parse_table(["Name,Age,Village", "Gaara,17,Sand", "Temari,19,Sand"], &specs).unwrap();
/// assert_eq!(pool.len(), 2);
/// assert_eq!(pool.lookup("gaara").unwrap().attribute(1), "Sand");
/// ```
pub fn parse_table<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    specs: &[AttributeSpec],
) -> Result<Pool, DatasetError> {
    let mut lines = lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, header) = lines.next().ok_or(DatasetError::MissingHeader)?;
    let columns: Vec<String> = split_fields(header).skip(1).map(str::to_string).collect();
    check_columns(&columns, specs)?;

    let mut records = Vec::new();
    for (line_number, line) in lines {
        let mut fields = split_fields(line);
        let name = fields.next().unwrap_or_default();

        let mut attributes: Vec<String> = fields.map(str::to_string).collect();
        if attributes.len() > columns.len() {
            warn!(
                line = line_number,
                extra = attributes.len() - columns.len(),
                "ignoring extra fields"
            );
        }
        attributes.resize(columns.len(), String::new());

        match CandidateRecord::new(name, attributes) {
            Ok(record) => records.push(record),
            Err(e) => warn!(line = line_number, "skipping row: {e}"),
        }
    }

    Ok(into_pool(records))
}

/// Parse a word list into a pool of attribute-less records
///
/// Words are uppercased for display; lines without letters are skipped.
#[must_use]
pub fn parse_word_list<'a>(lines: impl IntoIterator<Item = &'a str>) -> Pool {
    let records = lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|word| match CandidateRecord::new(word.to_uppercase(), Vec::new()) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("skipping word: {e}");
                None
            }
        });

    into_pool(records)
}

/// Parse grid rules: one line per category, the name followed by its buckets
///
/// Empty bucket fields are dropped and categories without any bucket are skipped.
///
/// # Examples
/// ```
/// use fandle::datasets::loader::parse_grid_rules;
///
/// let rules = parse_grid_rules(["Age,- 15,16-17,", "Village, Leaf, Sand", "Rank"]);
/// assert_eq!(rules.buckets("age"), ["- 15", "16-17"]);
/// assert_eq!(rules.buckets("Village"), ["Leaf", "Sand"]);
/// assert!(rules.buckets("Rank").is_empty());
/// ```
#[must_use]
pub fn parse_grid_rules<'a>(lines: impl IntoIterator<Item = &'a str>) -> GridRules {
    let mut categories = Vec::new();

    for (i, line) in lines.into_iter().enumerate() {
        let mut fields = split_fields(line);
        let category = fields.next().unwrap_or_default();
        if category.is_empty() {
            continue;
        }

        let buckets: Vec<String> = fields
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();
        if buckets.is_empty() {
            warn!(line = i + 1, category, "skipping grid category without buckets");
            continue;
        }

        categories.push((category.to_string(), buckets));
    }

    GridRules::new(categories)
}

/// Read a file and parse it with `parse`
///
/// # Errors
/// Returns `DatasetError::Io` if the file cannot be read, plus any error from `parse`.
pub fn load_from_file<P, F>(path: P, parse: F) -> Result<Pool, DatasetError>
where
    P: AsRef<Path>,
    F: FnOnce(&str) -> Result<Pool, DatasetError>,
{
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let pool = parse(&content)?;
    debug!(path = %path.display(), records = pool.len(), "loaded dataset");
    Ok(pool)
}

fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(str::trim)
}

fn check_columns(columns: &[String], specs: &[AttributeSpec]) -> Result<(), DatasetError> {
    let matches = columns.len() == specs.len()
        && columns
            .iter()
            .zip(specs)
            .all(|(column, spec)| column.eq_ignore_ascii_case(spec.name()));

    if matches {
        Ok(())
    } else {
        Err(DatasetError::ColumnMismatch {
            expected: specs.iter().map(|spec| spec.name().to_string()).collect(),
            found: columns.to_vec(),
        })
    }
}

fn into_pool(records: impl IntoIterator<Item = CandidateRecord>) -> Pool {
    let (pool, duplicates) = Pool::new(records);
    for duplicate in duplicates {
        warn!(
            name = duplicate.display_name(),
            key = duplicate.normalized_key(),
            "skipping duplicate record"
        );
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn specs() -> Vec<AttributeSpec> {
        vec![
            AttributeSpec::numeric("Age"),
            AttributeSpec::ordered("Rank", &["kage", "jonin", "chunin", "genin"]),
            AttributeSpec::exact("Village"),
        ]
    }

    #[test]
    fn parse_table_reads_rows_in_order() {
        let pool = parse_table(
            [
                "Name, Age, Rank, Village",
                "Naruto Uzumaki, 17, genin, Leaf",
                "",
                "Gaara,17,kage,Sand",
            ],
            &specs(),
        )
        .unwrap();

        assert_eq!(pool.len(), 2);
        let naruto = &pool.records()[0];
        assert_eq!(naruto.display_name(), "Naruto Uzumaki");
        assert_eq!(naruto.attributes(), ["17", "genin", "Leaf"]);
        assert_eq!(pool.records()[1].normalized_key(), "GAARA");
    }

    #[test]
    fn parse_table_pads_and_truncates_rows() {
        let pool = parse_table(
            ["Name,Age,Rank,Village", "Haku,15", "Zabuza,26,jonin,Mist,Water"],
            &specs(),
        )
        .unwrap();

        assert_eq!(pool.records()[0].attributes(), ["15", "", ""]);
        assert_eq!(pool.records()[1].attributes(), ["26", "jonin", "Mist"]);
    }

    #[test]
    fn parse_table_skips_bad_and_duplicate_rows() {
        let pool = parse_table(
            [
                "Name,Age,Rank,Village",
                "???,1,genin,Leaf",
                "Rock Lee,17,chunin,Leaf",
                "ROCK LEE,99,kage,Sand",
            ],
            &specs(),
        )
        .unwrap();

        assert_eq!(pool.len(), 1);
        assert_eq!(pool.records()[0].attribute(0), "17");
    }

    #[test]
    fn parse_table_rejects_wrong_header() {
        let err = parse_table(["Name,Age,Village,Rank"], &specs()).unwrap_err();
        assert!(matches!(err, DatasetError::ColumnMismatch { .. }));

        let err = parse_table(["Name,Age"], &specs()).unwrap_err();
        assert!(matches!(err, DatasetError::ColumnMismatch { .. }));
    }

    #[test]
    fn parse_table_requires_header() {
        assert!(matches!(
            parse_table(["", "  "], &specs()),
            Err(DatasetError::MissingHeader)
        ));
    }

    #[test]
    fn parse_word_list_uppercases_and_dedups() {
        let pool = parse_word_list(["crane", " Slate ", "", "CRANE", "12345"]);
        let names: Vec<&str> = pool
            .records()
            .iter()
            .map(CandidateRecord::display_name)
            .collect();
        assert_eq!(names, ["CRANE", "SLATE"]);
    }

    #[test]
    fn load_from_file_reads_table() {
        let path = std::env::temp_dir().join(format!("fandle-loader-{}.csv", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "Name,Age,Rank,Village").unwrap();
        writeln!(file, "Mei Terumi,30,kage,Mist").unwrap();
        drop(file);

        let specs = specs();
        let pool = load_from_file(&path, |content| parse_table(content.lines(), &specs)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(pool.lookup("mei terumi").unwrap().attribute(2), "Mist");
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/here.csv", |content| {
            Ok(parse_word_list(content.lines()))
        });
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }
}
