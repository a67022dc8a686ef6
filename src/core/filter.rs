use crate::domain::model::FilterReport;
use crate::utils::error::Result;
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

/// Parse a query file body: one query per line, blank lines and `#` comments
/// are skipped.
pub fn parse_query_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_string())
        .collect()
}

/// Load queries from a file. `.json` files hold an array of query strings,
/// anything else is treated as the one-query-per-line text format.
pub fn load_query_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        let queries: Vec<String> = serde_json::from_str(&content)?;
        Ok(queries)
    } else {
        Ok(parse_query_lines(&content))
    }
}

/// Drop every query that is already in `completed`, preserving order.
pub fn filter_remaining(
    queries: Vec<String>,
    completed: &HashSet<String>,
) -> (Vec<String>, FilterReport) {
    let total = queries.len();
    let remaining: Vec<String> = queries
        .into_iter()
        .filter(|query| !completed.contains(query))
        .collect();

    let report = FilterReport {
        total,
        completed: total - remaining.len(),
        remaining: remaining.len(),
    };

    (remaining, report)
}

/// Write queries one per line, newline-terminated. An empty list produces an
/// empty file.
pub fn write_query_lines<W: Write>(dest: &mut W, queries: &[String]) -> Result<()> {
    for query in queries {
        writeln!(dest, "{}", query)?;
    }
    dest.flush()?;
    Ok(())
}

/// Full filter pass: load the query file, subtract the completed set loaded
/// from a second file, write the remainder to `output_file`.
pub fn filter_query_file<P: AsRef<Path>>(
    queries_file: P,
    completed_file: P,
    output_file: P,
) -> Result<FilterReport> {
    let queries = load_query_file(&queries_file)?;
    tracing::info!("📋 Total queries in file: {}", queries.len());

    let completed: HashSet<String> = load_query_file(&completed_file)?.into_iter().collect();
    tracing::info!("✅ Found {} completed queries", completed.len());

    let (remaining, report) = filter_remaining(queries, &completed);

    let mut file = std::fs::File::create(&output_file)?;
    write_query_lines(&mut file, &remaining)?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_skips_blanks_and_comments() {
        let content = "آسانسور در تهران\n\n# yesterday's batch\n  نقاش در یزد  \n";
        let queries = parse_query_lines(content);

        assert_eq!(queries, vec!["آسانسور در تهران", "نقاش در یزد"]);
    }

    #[test]
    fn test_filter_remaining_preserves_order() {
        let queries = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let completed: HashSet<String> = ["b".to_string()].into_iter().collect();

        let (remaining, report) = filter_remaining(queries, &completed);

        assert_eq!(remaining, vec!["a", "c"]);
        assert_eq!(
            report,
            FilterReport {
                total: 3,
                completed: 1,
                remaining: 2
            }
        );
    }

    #[test]
    fn test_load_json_query_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("queries.json");
        std::fs::write(&path, r#"["آسانسور در تهران", "نقاش در یزد"]"#).unwrap();

        let queries = load_query_file(&path).unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0], "آسانسور در تهران");
    }

    #[test]
    fn test_load_malformed_json_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("queries.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(load_query_file(&path).is_err());
    }

    #[test]
    fn test_filter_query_file_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let queries_path = temp_dir.path().join("queries.txt");
        let completed_path = temp_dir.path().join("completed.txt");
        let output_path = temp_dir.path().join("queries_remaining.txt");

        let mut queries = std::fs::File::create(&queries_path).unwrap();
        writeln!(queries, "آسانسور در تهران").unwrap();
        writeln!(queries, "آسانسور در اصفهان").unwrap();
        writeln!(queries, "آسانسور در فارس").unwrap();
        drop(queries);

        std::fs::write(&completed_path, "آسانسور در اصفهان\n").unwrap();

        let report =
            filter_query_file(&queries_path, &completed_path, &output_path).unwrap();

        assert_eq!(
            report,
            FilterReport {
                total: 3,
                completed: 1,
                remaining: 2
            }
        );

        let output = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(output, "آسانسور در تهران\nآسانسور در فارس\n");
    }

    #[test]
    fn test_empty_queries_file_gives_empty_output() {
        let temp_dir = TempDir::new().unwrap();
        let queries_path = temp_dir.path().join("queries.txt");
        let completed_path = temp_dir.path().join("completed.txt");
        let output_path = temp_dir.path().join("queries_remaining.txt");

        std::fs::write(&queries_path, "\n# only comments\n").unwrap();
        std::fs::write(&completed_path, "").unwrap();

        let report =
            filter_query_file(&queries_path, &completed_path, &output_path).unwrap();
        assert_eq!(report.remaining, 0);
        assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "");
    }
}
