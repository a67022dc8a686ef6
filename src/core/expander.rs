use crate::utils::error::Result;
use std::io::Write;

/// Format a single search query: "<template> در <region>".
pub fn format_query(template: &str, region: &str) -> String {
    format!("{} در {}", template, region)
}

/// Expand `templates` × `regions` into `dest`, one query per line.
///
/// Templates are the outer loop, regions the inner loop, both in declared
/// order; identical inputs produce byte-identical output. Returns the number
/// of lines written.
pub fn generate<W: Write>(templates: &[&str], regions: &[&str], dest: &mut W) -> Result<usize> {
    let mut written = 0;

    for template in templates {
        for region in regions {
            writeln!(dest, "{} در {}", template, region)?;
            written += 1;
        }
    }

    dest.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count_is_cartesian_product() {
        let templates = ["آسانسور", "نقاش"];
        let regions = ["تهران", "اصفهان", "فارس"];

        let mut buf = Vec::new();
        let count = generate(&templates, &regions, &mut buf).unwrap();

        assert_eq!(count, 6);
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.lines().count(), 6);
    }

    #[test]
    fn test_templates_outer_regions_inner() {
        let templates = ["آسانسور"];
        let regions = ["تهران", "اصفهان"];

        let mut buf = Vec::new();
        generate(&templates, &regions, &mut buf).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output, "آسانسور در تهران\nآسانسور در اصفهان\n");
    }

    #[test]
    fn test_empty_templates_give_empty_output() {
        let mut buf = Vec::new();
        let count = generate(&[], &["تهران"], &mut buf).unwrap();

        assert_eq!(count, 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_empty_regions_give_empty_output() {
        let mut buf = Vec::new();
        let count = generate(&["آسانسور"], &[], &mut buf).unwrap();

        assert_eq!(count, 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_output_is_deterministic() {
        let templates = ["تعمیر آسانسور", "سرویس آسانسور"];
        let regions = ["گیلان", "قم"];

        let mut first = Vec::new();
        let mut second = Vec::new();
        generate(&templates, &regions, &mut first).unwrap();
        generate(&templates, &regions, &mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_format_query() {
        assert_eq!(format_query("نقاش", "یزد"), "نقاش در یزد");
    }
}
