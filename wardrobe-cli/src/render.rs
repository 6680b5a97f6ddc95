use chrono::Local;
use std::fmt::Write;
use wardrobe_core::{ClothingItem, WeatherReport};

pub fn report(report: &WeatherReport) -> String {
    let snapshot = &report.snapshot;
    let fetched = report.fetched_at.with_timezone(&Local).format("%Y-%m-%d %H:%M");

    let mut out = String::new();
    let _ = writeln!(out, "{}", snapshot.location_name);
    let _ = writeln!(out, "  {}°C  {}", snapshot.temperature_c, snapshot.condition_summary());
    let _ = writeln!(
        out,
        "  Feels like {}°C · Humidity {}%",
        snapshot.feels_like_c, snapshot.humidity_pct
    );
    let _ = writeln!(out, "  Updated {fetched}");
    out.push('\n');
    out.push_str(&outfit(&report.outfit));
    out
}

pub fn outfit(items: &[ClothingItem]) -> String {
    let mut out = String::from("Recommended outfit\n");
    let width = items.iter().map(|i| i.icon_id.len()).max().unwrap_or(0);
    for item in items {
        let _ = writeln!(out, "  {:<width$}  {}", item.icon_id, item.label);
    }
    out
}
