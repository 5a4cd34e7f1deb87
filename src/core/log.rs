use crate::errors::AppResult;
use crate::store::Store;
use crate::store::log::read_log;
use crate::ui::messages::info;
use crate::utils::colors::colors_enabled;
use crate::utils::formatting::{pad_right, truncate};
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// ANSI colour for an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "backup" => Colour::Blue,
        "export" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51), // orange
        other if other.starts_with("migrate_to_") => Colour::Purple,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &Store) -> AppResult<()> {
        let entries = read_log(store.path())?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        // op + target in a single column, capped width
        let rows: Vec<(String, String, String, String)> = entries
            .into_iter()
            .map(|r| {
                let date = chrono::DateTime::parse_from_rfc3339(&r.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(r.date);
                let op_target = if r.target.is_empty() {
                    r.operation.clone()
                } else {
                    format!("{} ({})", r.operation, r.target)
                };
                (date, r.operation, truncate(&op_target, MAX_OP_WIDTH), r.message)
            })
            .collect();

        let id_w = rows.len().to_string().len();
        let date_w = rows.iter().map(|r| r.0.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|r| r.2.chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for (i, (date, operation, op_target, message)) in rows.iter().enumerate() {
            // only the operation word is coloured
            let shown = match op_target.split_once(' ') {
                Some((op_word, rest)) if colors_enabled() => format!(
                    "{} {}",
                    color_for_operation(operation).paint(op_word),
                    rest
                ),
                None if colors_enabled() => color_for_operation(operation)
                    .paint(op_target.as_str())
                    .to_string(),
                _ => op_target.clone(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {} => {}",
                i + 1,
                date,
                pad_right(&shown, op_w),
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
