//! Plain-text rendering of the derived view.

use crate::student::Student;

/// Shown instead of a table when there are no rows.
pub const EMPTY_TABLE_MESSAGE: &str = "Chưa có học sinh nào";

const HEADERS: [&str; 4] = ["ID", "Họ tên", "Tuổi", "Lớp"];

/// Render rows as an aligned text table with a header line.
pub fn render_table(rows: &[&Student]) -> String {
    if rows.is_empty() {
        return EMPTY_TABLE_MESSAGE.to_string();
    }

    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|s| [s.id.clone(), s.name.clone(), s.age.to_string(), s.class.clone()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, row: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = row
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| {
            let pad = width - cell.chars().count();
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rows_show_message() {
        assert_eq!(render_table(&[]), EMPTY_TABLE_MESSAGE);
    }

    #[test]
    fn columns_align_on_char_width() {
        let a = Student {
            id: "1".into(),
            name: "Nguyễn Văn A".into(),
            age: 18,
            class: "12A1".into(),
        };
        let b = Student {
            id: "22".into(),
            name: "Bo".into(),
            age: 9,
            class: "3C".into(),
        };
        let table = render_table(&[&a, &b]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ID  Họ tên        Tuổi  Lớp");
        assert_eq!(lines[1], "1   Nguyễn Văn A  18    12A1");
        assert_eq!(lines[2], "22  Bo            9     3C");
    }
}
