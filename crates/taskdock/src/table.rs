/// Box-drawn table with per-column widths fitted to the content.
pub struct TableFormatter {
    headers: Vec<&'static str>,
    widths: Vec<usize>,
}

impl TableFormatter {
    /// Column widths are the widest cell (or header), capped at `max_widths`.
    pub fn new(headers: &[&'static str], max_widths: &[usize], rows: &[Vec<String>]) -> Self {
        let widths = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let widest = rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0);
                let cap = max_widths.get(i).copied().unwrap_or(usize::MAX);
                widest.max(header.len()).min(cap.max(header.len()))
            })
            .collect();

        Self {
            headers: headers.to_vec(),
            widths,
        }
    }

    pub fn print_table(&self, rows: &[Vec<String>]) {
        println!("{}", self.border('┌', '┬', '┐'));
        println!("{}", self.row(&self.headers));
        println!("{}", self.border('├', '┼', '┤'));
        for row in rows {
            println!("{}", self.row(row));
        }
        println!("{}", self.border('└', '┴', '┘'));
    }

    fn row<S: AsRef<str>>(&self, cells: &[S]) -> String {
        let body: Vec<String> = self
            .widths
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let cell: &str = cells.get(i).map_or("", |c| c.as_ref());
                truncate(cell, *width)
            })
            .collect();
        format!("│ {} │", body.join(" │ "))
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(&middle.to_string()), right)
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Counts characters, not bytes, so window titles with multi-byte
/// characters are cut on a character boundary.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_pads_short_values() {
        assert_eq!(truncate("code", 6), "code  ");
    }

    #[test]
    fn test_truncate_multibyte_title() {
        let result = truncate("Résumé – Word Document", 10);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_widths_fit_content_within_cap() {
        let rows = vec![
            vec!["chrome".to_string(), "a".repeat(80)],
            vec!["code".to_string(), "short".to_string()],
        ];
        let table = TableFormatter::new(&["Process", "Title"], &[20, 40], &rows);
        assert_eq!(table.widths, vec![7, 40]);
    }

    #[test]
    fn test_row_has_one_cell_per_column() {
        let table = TableFormatter::new(&["A", "B"], &[], &[]);
        assert_eq!(table.row(&["x", "y"]), "│ x │ y │");
        assert_eq!(table.border('┌', '┬', '┐'), "┌───┬───┐");
    }
}
