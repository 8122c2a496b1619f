//! Renders one instant in several timezones, with format parts aligned
//! into columns so the timezone lines can be compared at a glance.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::Error;

/// One line per timezone; each format part is padded to the widest value
/// that part produced across all the timezones.
///
/// # Errors
/// `InvalidTimezone` when a timezone name isn't in the tz database,
/// `InvalidDateTimeFormat` when chrono rejects a format part.
pub fn render_instant(
    at: DateTime<Utc>,
    format_parts: &[String],
    timezones: &[String],
) -> Result<String, Error> {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(timezones.len());

    for name in timezones {
        let tz: Tz = name
            .parse()
            .map_err(|_| Error::InvalidTimezone(name.clone()))?;
        let local = at.with_timezone(&tz);

        let mut row = Vec::with_capacity(format_parts.len());
        for part in format_parts {
            let mut rendered = String::new();
            // chrono surfaces bad specifiers as a fmt error, not a panic
            write!(rendered, "{}", local.format(part))
                .map_err(|_| Error::InvalidDateTimeFormat(part.clone()))?;
            row.push(rendered);
        }
        rows.push(row);
    }

    let mut widths = vec![0usize; format_parts.len()];
    for row in &rows {
        for (index, part) in row.iter().enumerate() {
            widths[index] = widths[index].max(part.chars().count());
        }
    }

    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(index, part)| format!("{part:<width$}", width = widths[index]))
                .collect::<Vec<_>>()
                .join(" ")
                .trim()
                .to_string()
        })
        .collect();

    Ok(lines.join("\n"))
}
