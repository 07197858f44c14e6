//! Output formatting for CLI display.

use jiff::civil::Date;

use crate::model::Activity;

const DOT: &str = "●";
const LINE: &str = "│";

/// Format a date the way the timeline shows it, e.g. `Jan 10, 2024`.
pub(super) fn format_date(date: Date) -> String {
    date.strftime("%b %-d, %Y").to_string()
}

/// `1 activity tracked`, `3 activities tracked`.
fn format_count(count: usize) -> String {
    let noun = if count == 1 { "activity" } else { "activities" };
    format!("{count} {noun} tracked")
}

/// Render the full timeline view: header, then either the empty state or
/// one item per activity joined by a vertical connector.
pub(super) fn format_timeline(activities: &[Activity]) -> String {
    let mut out = String::new();
    out.push_str("Recent Activities\n");
    out.push_str(&format_count(activities.len()));
    out.push_str("\n\n");

    if activities.is_empty() {
        out.push_str("No activities yet\n");
        out.push_str("Start tracking your activities by adding your first entry.\n");
        out.push_str("  timeline add \"<title>\" [--date YYYY-MM-DD] [--link URL]\n");
        return out;
    }

    for (i, activity) in activities.iter().enumerate() {
        let is_last = i + 1 == activities.len();
        format_item(&mut out, activity, is_last);
    }
    out
}

fn format_item(out: &mut String, activity: &Activity, is_last: bool) {
    let gutter = if is_last { " " } else { LINE };
    out.push_str(&format!(
        "{DOT} {}  {}\n",
        activity.title,
        format_date(activity.date)
    ));
    if let Some(link) = &activity.link {
        out.push_str(&format!("{gutter}   ↗ {link}\n"));
    }
    if !is_last {
        out.push_str(gutter);
        out.push('\n');
    }
}
