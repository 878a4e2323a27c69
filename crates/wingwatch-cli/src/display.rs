use chrono::{NaiveDate, NaiveDateTime};
use wingwatch_core::{MapBounds, Sighting};

/// Render an upstream observation date (`YYYY-MM-DD HH:MM` or `YYYY-MM-DD`)
/// as e.g. `May 1, 2025`. Unrecognised input is returned unchanged.
pub(crate) fn fmt_obs_date(raw: &str) -> String {
    let date = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
        .map(|dt| dt.date())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(d) => d.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Shorten `text` to `max` characters, marking the cut with `...`.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

pub(crate) fn fmt_bounds(bounds: &MapBounds) -> String {
    format!(
        "Map bounds: N {:.4}  S {:.4}  E {:.4}  W {:.4}",
        bounds.north, bounds.south, bounds.east, bounds.west
    )
}

pub(crate) fn print_sightings_table(sightings: &[Sighting]) {
    let header = format!(
        "{:<14}{:<28}{:>6}  {:<22}{:<32}CHECKLIST",
        "DATE", "SPECIES", "COUNT", "OBSERVER", "LOCATION"
    );
    println!("{header}");
    for s in sightings {
        println!(
            "{:<14}{:<28}{:>6}  {:<22}{:<32}{}",
            fmt_obs_date(&s.date),
            truncate(&s.species, 25),
            s.count,
            truncate(&s.observer_name, 19),
            truncate(&s.location.name, 29),
            s.checklist_url
        );
    }
}
