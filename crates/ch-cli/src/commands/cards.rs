use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use ch_core::MAJOR_ARCANA;

pub fn run() -> Result<(), String> {
    println!("  {}\n", "Major Arcana".bold());
    println!("{}", card_table());
    println!();
    println!("  {} cards", MAJOR_ARCANA.len());
    Ok(())
}

fn card_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "English", "中文", "Image"]);

    for (i, card) in MAJOR_ARCANA.iter().enumerate() {
        table.add_row(vec![
            i.to_string(),
            card.name_en.to_string(),
            card.name_zh.to_string(),
            card.image_ref.to_string(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_card() {
        assert_eq!(card_table().row_count(), MAJOR_ARCANA.len());
    }

    #[test]
    fn chinese_column_measured_in_display_width() {
        // Every Chinese name is CJK only, two columns per glyph.
        let widest = MAJOR_ARCANA
            .iter()
            .map(|c| c.name_zh.chars().count() * 2)
            .max()
            .unwrap();
        let widths = card_table().column_max_content_widths();
        assert_eq!(usize::from(widths[2]), widest);
    }

    #[test]
    fn image_column_starts_at_same_offset() {
        let rendered = card_table().to_string();
        let rows: Vec<&str> = rendered.lines().filter(|l| l.contains("cards/")).collect();
        assert_eq!(rows.len(), MAJOR_ARCANA.len());
        // Column separators before the image cell line up once CJK glyphs
        // count as two columns.
        let offset = |line: &str| {
            let prefix = &line[..line.find("cards/").unwrap()];
            prefix
                .chars()
                .map(|c| if c.is_ascii() { 1 } else { 2 })
                .sum::<usize>()
        };
        let first = offset(rows[0]);
        assert!(rows.iter().all(|r| offset(r) == first));
    }
}
