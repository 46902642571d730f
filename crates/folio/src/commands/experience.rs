//! `folio experience` -- the work experience timeline page.
//!
//! Renders the computed [`TimelineLayout`] as a vertical chart: a year
//! gutter on the left, one column per lane, months mapped to rows via
//! their percentage positions. A numbered legend below the chart carries
//! the details the bars cannot.

use std::path::Path;

use anyhow::{Context, Result};

use folio_content::experience;
use folio_content::i18n::{category_label, translations};
use folio_core::layout::{TimelineLayout, layout};
use folio_core::month::Month;
use folio_core::position::Position;
use folio_ui::styles::{
    BAR, GUTTER_LINE, GUTTER_TICK, render_category, render_heading, render_muted, render_record,
    render_record_bold,
};

use crate::cli::ExperienceArgs;
use crate::context::RuntimeContext;
use crate::output::{ExperienceView, output_json};

/// Execute the `folio experience` command.
pub fn run(ctx: &RuntimeContext, args: &ExperienceArgs) -> Result<()> {
    let records = match &args.data {
        Some(path) => experience::load_records(Path::new(path))
            .with_context(|| format!("failed to load work records from {}", path))?,
        None => experience::built_in(),
    };

    // One "now" per invocation; every stage of the layout sees the same month.
    let now = Month::current();
    let result = layout(&records, now);

    if !ctx.quiet {
        for rejection in &result.rejections {
            eprintln!(
                "warning: skipping {:?}: {}",
                rejection.record.organization, rejection.reason
            );
        }
    }

    if ctx.json {
        output_json(&ExperienceView {
            locale: ctx.locale,
            layout: result,
        });
        return Ok(());
    }

    let tr = translations(ctx.locale);
    println!("{}", render_heading(tr.experience.title));
    if !ctx.quiet {
        println!("{}", render_muted(tr.experience.subtitle));
    }
    println!();

    if result.items.is_empty() {
        println!("{}", tr.experience.empty);
        return Ok(());
    }

    for line in render_chart(&result, ctx) {
        println!("{}", line);
    }
    println!();
    for line in render_legend(&result, ctx) {
        println!("{}", line);
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Chart rendering
// ---------------------------------------------------------------------------

/// Maps a percentage position to a row on a chart of `height` rows.
fn percent_to_row(percent: f64, height: usize) -> usize {
    let last = height - 1;
    ((percent / 100.0) * last as f64).round() as usize
}

/// Row extent for one bar: top row and row count.
///
/// Short engagements are held at `min_rows` so a one-month record stays
/// visible; a bar pushed past the bottom edge shifts up instead.
fn bar_rows(position: &Position, height: usize, min_rows: usize) -> (usize, usize) {
    let top = percent_to_row(position.top, height);
    let bottom = percent_to_row(position.top + position.height, height);
    let rows = (bottom.saturating_sub(top) + 1).max(min_rows).min(height);
    let top = top.min(height - rows);
    (top, rows)
}

/// Renders the chart rows: year gutter plus one column per lane.
///
/// Each bar's top cell carries its legend number; the rest of the bar is
/// solid blocks in the record's palette color.
fn render_chart(result: &TimelineLayout, ctx: &RuntimeContext) -> Vec<String> {
    let timeline = &ctx.config.timeline;
    let height = usize::from(timeline.effective_height());
    let cell_width = usize::from(timeline.lane_width).max(2);
    let min_rows = usize::from(timeline.min_rows).max(1);

    // Paint bars into the grid in start order. Where rounding lands two
    // bars of one lane on the same row, the later bar's cap wins.
    let mut grid: Vec<Vec<Option<usize>>> = vec![vec![None; result.lanes]; height];
    let mut cap_rows = vec![0usize; result.items.len()];
    for (index, item) in result.items.iter().enumerate() {
        let (top, rows) = bar_rows(&item.position, height, min_rows);
        cap_rows[index] = top;
        for cells in grid.iter_mut().skip(top).take(rows) {
            cells[item.lane] = Some(index);
        }
    }

    // Year labels; the first marker to claim a row keeps it.
    let mut marker_rows: Vec<Option<i32>> = vec![None; height];
    if timeline.markers {
        for marker in &result.markers {
            let row = percent_to_row(marker.percent, height);
            if marker_rows[row].is_none() {
                marker_rows[row] = Some(marker.year);
            }
        }
    }

    let mut lines = Vec::with_capacity(height);
    for (row, cells) in grid.iter().enumerate() {
        let mut line = String::new();
        if timeline.markers {
            let gutter = match marker_rows[row] {
                Some(year) => format!("{:04} {}", year, GUTTER_TICK),
                None => format!("     {}", GUTTER_LINE),
            };
            line.push_str(&render_muted(&gutter));
            line.push(' ');
        }
        for &cell in cells {
            match cell {
                Some(index) => {
                    let plain = if row == cap_rows[index] {
                        format!("{:<width$}", index + 1, width = cell_width)
                    } else {
                        format!("{:<width$}", BAR.repeat(cell_width - 1), width = cell_width)
                    };
                    line.push_str(&render_record(&plain, index));
                }
                None => line.push_str(&" ".repeat(cell_width)),
            }
        }
        lines.push(line.trim_end().to_string());
    }
    lines
}

// ---------------------------------------------------------------------------
// Legend rendering
// ---------------------------------------------------------------------------

/// Renders the numbered legend: one entry per bar, same order and colors.
fn render_legend(result: &TimelineLayout, ctx: &RuntimeContext) -> Vec<String> {
    let tr = translations(ctx.locale);
    let mut lines = Vec::new();

    for (index, item) in result.items.iter().enumerate() {
        let record = &item.record;
        let number = render_record_bold(&format!("{:>2}.", index + 1), index);

        let title = record.title.for_locale(ctx.locale);
        let mut head = record.organization.clone();
        if !title.is_empty() {
            head.push_str(" - ");
            head.push_str(title);
        }

        let mut line = format!("{} {}", number, head);
        if let Some(category) = &record.category {
            let label = category_label(category, ctx.locale);
            line.push_str("  ");
            line.push_str(&render_category(&format!("[{}]", label), category));
        }
        lines.push(line);

        let start = record.start_month().map(format_month).unwrap_or_default();
        let end = if record.is_ongoing() {
            tr.experience.present.to_string()
        } else {
            record
                .effective_end(result.now)
                .map(format_month)
                .unwrap_or_default()
        };
        let mut dates = format!("{} - {}", start, end);
        if !record.tags.is_empty() {
            dates.push_str(" · ");
            dates.push_str(&record.tags.join(", "));
        }
        lines.push(format!("    {}", render_muted(&dates)));

        if !ctx.quiet {
            let description = record.description.for_locale(ctx.locale);
            if !description.is_empty() {
                lines.push(format!("    {}", description));
            }
        }
    }
    lines
}

/// `YYYY/MM`, the display form for month tokens.
fn format_month(month: Month) -> String {
    format!("{:04}/{:02}", month.year(), month.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_config::config::DisplayConfig;
    use folio_core::enums::Category;
    use folio_core::locale::Locale;
    use folio_core::record::WorkRecordBuilder;

    fn test_ctx() -> RuntimeContext {
        RuntimeContext {
            locale: Locale::En,
            json: false,
            verbose: false,
            quiet: false,
            config: DisplayConfig::default(),
        }
    }

    fn fixture_layout() -> TimelineLayout {
        let records = vec![
            WorkRecordBuilder::new("Harbor Systems")
                .title("Backend Engineer", "後端工程師")
                .start("2019-01")
                .end("2020-06")
                .category(Category::FullTime)
                .tags(["Rust", "PostgreSQL"])
                .build(),
            WorkRecordBuilder::new("Nightshift Studio")
                .start("2019-09")
                .category(Category::Freelance)
                .build(),
        ];
        let now: Month = "2024-06".parse().unwrap();
        layout(&records, now)
    }

    #[test]
    fn percent_to_row_hits_both_edges() {
        assert_eq!(percent_to_row(0.0, 20), 0);
        assert_eq!(percent_to_row(100.0, 20), 19);
        assert_eq!(percent_to_row(50.0, 21), 10);
    }

    #[test]
    fn bar_rows_honors_the_minimum() {
        let blink = Position {
            top: 69.0,
            height: 0.5,
        };
        let (_, rows) = bar_rows(&blink, 20, 3);
        assert_eq!(rows, 3);
    }

    #[test]
    fn bar_rows_shifts_up_at_the_bottom_edge() {
        let tail = Position {
            top: 100.0,
            height: 0.0,
        };
        let (top, rows) = bar_rows(&tail, 20, 2);
        assert_eq!(rows, 2);
        assert_eq!(top, 18);
    }

    #[test]
    fn bar_rows_full_window_bar_spans_every_row() {
        let full = Position {
            top: 0.0,
            height: 100.0,
        };
        assert_eq!(bar_rows(&full, 20, 1), (0, 20));
    }

    #[test]
    fn chart_has_one_line_per_row() {
        let ctx = test_ctx();
        let lines = render_chart(&fixture_layout(), &ctx);
        assert_eq!(
            lines.len(),
            usize::from(ctx.config.timeline.effective_height())
        );
    }

    #[test]
    fn chart_caps_carry_legend_numbers() {
        let mut ctx = test_ctx();
        // Without the year gutter the only digits are the bar caps.
        ctx.config.timeline.markers = false;
        let lines = render_chart(&fixture_layout(), &ctx);
        let joined = lines.join("\n");
        assert!(joined.contains('1'));
        assert!(joined.contains('2'));
        assert!(joined.contains(BAR));
    }

    #[test]
    fn chart_gutter_lists_window_years() {
        let ctx = test_ctx();
        let joined = render_chart(&fixture_layout(), &ctx).join("\n");
        assert!(joined.contains("2019"));
        assert!(joined.contains("2024"));
    }

    #[test]
    fn legend_carries_details_per_item() {
        let ctx = test_ctx();
        let joined = render_legend(&fixture_layout(), &ctx).join("\n");
        assert!(joined.contains("Harbor Systems - Backend Engineer"));
        assert!(joined.contains("[Full-time]"));
        assert!(joined.contains("2019/01 - 2020/06"));
        assert!(joined.contains("Rust, PostgreSQL"));
        // The ongoing record ends at the localized present marker.
        assert!(joined.contains("2019/09 - Present"));
    }

    #[test]
    fn legend_localizes_to_chinese() {
        let mut ctx = test_ctx();
        ctx.locale = Locale::Zh;
        let joined = render_legend(&fixture_layout(), &ctx).join("\n");
        assert!(joined.contains("後端工程師"));
        assert!(joined.contains("[全職]"));
        assert!(joined.contains("至今"));
    }
}
