//! # Rendering
//!
//! Turns a [`PageView`] into terminal text or JSON. The view already carries display
//! strings for every cell, so this module only does layout:
//!
//! - `header`: Column label plus `▲`/`▼` on the sorted column.
//! - `rows`: One line per record; numeric columns right-aligned, text columns left.
//! - `footer`: `Page X of Y`, match counts, and where the data came from.
//!
//! Widths are measured with `unicode-width`, so CJK names and emoji line up. A column is
//! as wide as its widest cell, capped per column; longer cells are cut with `…`.

use chrono::{DateTime, Utc};
use orgtable::derive::NOT_AVAILABLE;
use orgtable::model::{Column, ColumnKind, SortDirection};
use orgtable::store::DataOrigin;
use orgtable::view::{ColumnHeader, PageView};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::styles;

pub const COLUMN_GAP: &str = "  ";
pub const ELLIPSIS: char = '…';

fn max_width(column: Column) -> usize {
    match column {
        Column::Name => 28,
        Column::Industries => 32,
        Column::Amount | Column::RoundValuationUsd => 18,
        Column::Round => 20,
        Column::GrowthStage => 16,
        Column::LaunchYear => 12,
    }
}

/// What the footer should say about the records on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Provenance {
    pub origin: DataOrigin,
    /// The most recent fetch failed and older records are shown.
    pub refresh_failed: bool,
}

pub fn indicator(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
        SortDirection::Unsorted => "",
    }
}

fn header_text(header: &ColumnHeader) -> String {
    match header.sort {
        SortDirection::Unsorted => header.label.to_string(),
        direction => format!("{} {}", header.label, indicator(direction)),
    }
}

/// Cuts `text` to at most `max` display columns, ending in `…` when shortened.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let budget = max.saturating_sub(ELLIPSIS.width().unwrap_or(1));
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if max > 0 {
        out.push(ELLIPSIS);
    }
    out
}

fn pad(text: &str, width: usize, kind: ColumnKind) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    match kind {
        ColumnKind::Numeric => format!("{}{}", fill, text),
        ColumnKind::Text => format!("{}{}", text, fill),
    }
}

fn column_widths(view: &PageView) -> Vec<usize> {
    view.columns
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let header_width = header_text(header).width();
            let widest_cell = view
                .rows
                .iter()
                .filter_map(|row| row.cells.get(i))
                .map(|cell| cell.width())
                .max()
                .unwrap_or(0);
            widest_cell
                .min(max_width(header.column))
                .max(header_width)
        })
        .collect()
}

pub fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}

pub fn render_page(view: &PageView, provenance: &Provenance) -> String {
    let widths = column_widths(view);
    let mut out = String::new();

    let header: Vec<String> = view
        .columns
        .iter()
        .zip(&widths)
        .map(|(header, width)| {
            let text = pad(&header_text(header), *width, header.column.kind());
            let style = if header.sort == SortDirection::Unsorted {
                &*styles::HEADER
            } else {
                &*styles::SORTED_HEADER
            };
            style.apply_to(text).to_string()
        })
        .collect();
    out.push_str(header.join(COLUMN_GAP).trim_end());
    out.push('\n');

    let rule_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);
    out.push_str(&styles::RULE.apply_to("─".repeat(rule_width)).to_string());
    out.push('\n');

    if view.rows.is_empty() {
        out.push_str(&styles::MUTED.apply_to("No matching records.").to_string());
        out.push('\n');
    }

    for row in &view.rows {
        let cells: Vec<String> = view
            .columns
            .iter()
            .zip(&widths)
            .zip(&row.cells)
            .map(|((header, width), cell)| {
                let text = pad(&truncate_to_width(cell, *width), *width, header.column.kind());
                if cell == NOT_AVAILABLE {
                    styles::MISSING.apply_to(text).to_string()
                } else {
                    text
                }
            })
            .collect();
        out.push_str(cells.join(COLUMN_GAP).trim_end());
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&render_footer(view, provenance));
    out
}

fn render_footer(view: &PageView, provenance: &Provenance) -> String {
    let mut footer = format!("Page {} of {}", view.page_index + 1, view.page_count);
    if view.matched_records == view.total_records {
        footer.push_str(&format!(" · {} records", view.total_records));
    } else {
        footer.push_str(&format!(
            " · {} of {} records match",
            view.matched_records, view.total_records
        ));
    }
    let mut out = styles::MUTED.apply_to(footer).to_string();
    out.push('\n');

    if let DataOrigin::Snapshot { saved_at } = provenance.origin {
        let note = format!("Showing snapshot saved {}", format_time_ago(saved_at));
        out.push_str(&styles::MUTED.apply_to(note).to_string());
        out.push('\n');
    }
    if provenance.refresh_failed {
        let note = "Could not refresh records; showing the last ones loaded.";
        out.push_str(&styles::WARNING.apply_to(note).to_string());
        out.push('\n');
    }
    out
}

pub fn render_json(view: &PageView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use console::strip_ansi_codes;
    use orgtable::model::Record;
    use orgtable::view::{compose, ViewState};

    fn sample_view(state: &ViewState) -> PageView {
        let records = vec![
            Record::new("Acme Robotics")
                .with_industries("robotics;ai")
                .with_amount("1000000-3000000")
                .with_round("series a")
                .with_valuation("40000000")
                .with_growth_stage("early growth")
                .with_launch_year(2018),
            Record::new("Quiet Co").with_valuation("undisclosed"),
        ];
        compose(&records, state)
    }

    fn plain(view: &PageView, provenance: &Provenance) -> String {
        strip_ansi_codes(&render_page(view, provenance)).to_string()
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_to_width("a longer piece of text", 8), "a longe…");
        assert_eq!(truncate_to_width("日本語の会社", 7), "日本語…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_header_shows_sort_indicator() {
        let out = plain(&sample_view(&ViewState::default()), &Provenance::default());
        let header = out.lines().next().unwrap();
        assert!(header.starts_with("Company Name"));
        assert!(header.contains("Valuation ▼"));
        assert!(!header.contains("▲"));

        let state = ViewState::default().toggle_sort(Column::Name);
        let out = plain(&sample_view(&state), &Provenance::default());
        assert!(out.lines().next().unwrap().contains("Company Name ▲"));
    }

    #[test]
    fn test_rows_and_footer() {
        let out = plain(&sample_view(&ViewState::default()), &Provenance::default());
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[2].starts_with("Acme Robotics"));
        assert!(lines[2].contains("$2,000,000"));
        assert!(lines[2].contains("$40,000,000"));
        assert!(lines[2].contains("Robotics, Ai"));
        assert!(lines[3].starts_with("Quiet Co"));
        assert!(lines[3].contains("N/A"));
        assert!(out.contains("Page 1 of 1 · 2 records"));
    }

    #[test]
    fn test_columns_align() {
        let out = plain(&sample_view(&ViewState::default()), &Provenance::default());
        let lines: Vec<&str> = out.lines().collect();
        let header_pos = lines[0].find("Launch Year").unwrap();
        let year_pos = lines[2].find("2018").unwrap();
        assert_eq!(
            lines[0][..header_pos].width() + "Launch Year".width(),
            lines[2][..year_pos].width() + "2018".width()
        );
    }

    #[test]
    fn test_empty_page() {
        let state = ViewState::default().with_company_filter("zzz");
        let out = plain(&sample_view(&state), &Provenance::default());
        assert!(out.contains("No matching records."));
        assert!(out.contains("Page 1 of 1 · 0 of 2 records match"));
    }

    #[test]
    fn test_provenance_notes() {
        let provenance = Provenance {
            origin: DataOrigin::Snapshot {
                saved_at: Utc::now() - Duration::hours(3),
            },
            refresh_failed: true,
        };
        let out = plain(&sample_view(&ViewState::default()), &provenance);
        assert!(out.contains("Showing snapshot saved 3 hours ago"));
        assert!(out.contains("Could not refresh records"));

        let fetched = Provenance {
            origin: DataOrigin::Fetched { at: Utc::now() },
            refresh_failed: false,
        };
        let out = plain(&sample_view(&ViewState::default()), &fetched);
        assert!(!out.contains("snapshot"));
    }

    #[test]
    fn test_json_output() {
        let json = render_json(&sample_view(&ViewState::default())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["page_count"], 1);
        assert_eq!(value["columns"][4]["sort"], "descending");
        assert_eq!(value["columns"][0]["sort"], "none");
        assert_eq!(value["rows"][1]["cells"][4], "N/A");
    }
}
