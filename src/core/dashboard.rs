use crate::models::ScheduleEntry;
use crate::models::category::{Category, DEFAULT_COLOR, color_for_label};
use crate::utils::colors::{GREY, RESET, colors_enabled, paint_hex, swatch};
use crate::utils::entry_title;
use crate::utils::formatting::{bold, pad_right, progress_bar, truncate};

const LABEL_WIDTH: usize = 32;

/// Horizontal bar chart of `progress_percent`, one bar per entry.
/// Entries without a progress value are listed after the chart.
pub fn render_dashboard(entries: &[&ScheduleEntry], bar_width: usize) -> String {
    let mut out = String::new();
    let (tracked, untracked): (Vec<&ScheduleEntry>, Vec<&ScheduleEntry>) = entries
        .iter()
        .copied()
        .partition(|e| e.progress_percent.is_some());

    if tracked.is_empty() {
        out.push_str("No entries with a progress value.\n");
    }

    for e in &tracked {
        let pct = e.progress_percent.unwrap_or(0);
        let color = color_for_label(&e.category);
        let (done, todo) = progress_bar(pct, bar_width);
        let label = truncate(&entry_title(&e.owner_name, &e.description), LABEL_WIDTH);

        let todo = if colors_enabled() {
            format!("{GREY}{todo}{RESET}")
        } else {
            todo
        };

        out.push_str(&format!(
            "{} {}{} {:>3}%\n",
            pad_right(&label, LABEL_WIDTH),
            paint_hex(color, &done),
            todo,
            pct
        ));

        if let Some(memo) = e.memo.as_deref().filter(|m| !m.is_empty()) {
            out.push_str(&format!("{}  └ {memo}\n", " ".repeat(LABEL_WIDTH)));
        }
    }

    if !tracked.is_empty() {
        let avg = tracked
            .iter()
            .map(|e| e.progress_percent.unwrap_or(0) as u32)
            .sum::<u32>()
            / tracked.len() as u32;
        out.push_str(&format!("\n{} {avg}%\n", bold("Average progress:")));
    }

    if !untracked.is_empty() {
        out.push_str(&format!("\n{} entries without progress:\n", untracked.len()));
        for e in untracked {
            out.push_str(&format!(
                "  {} {}\n",
                e.short_id(),
                entry_title(&e.owner_name, &e.description)
            ));
        }
    }

    out
}

/// Category legend: swatch, label, code, color and time window.
pub fn render_legend() -> String {
    let mut out = String::new();
    for c in Category::ALL {
        let window = c
            .half_day_window()
            .map(|(from, to)| format!("{}-{}", from.format("%H:%M"), to.format("%H:%M")))
            .unwrap_or_else(|| "all day".to_string());

        out.push_str(&format!(
            "{} {} {} {} {}\n",
            swatch(c.color()),
            pad_right(&paint_hex(c.color(), c.label()), 20),
            pad_right(c.code(), 7),
            c.color(),
            window
        ));
    }
    out.push_str(&format!(
        "{} {} {}\n",
        swatch(DEFAULT_COLOR),
        pad_right("(any other label)", 28),
        DEFAULT_COLOR
    ));
    out
}
