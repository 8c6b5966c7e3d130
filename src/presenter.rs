use nearch_entities::display_item::DisplayItem;
use std::io::{self, Write};

/// Caption of the distance limit, `0` reads as "no limit".
pub fn distance_label(max_distance_km: f64) -> String {
    if max_distance_km > 0.0 {
        format!("Distance: {}km", max_distance_km.trunc())
    } else {
        "Distance: any".to_string()
    }
}

pub fn item_line(item: &DisplayItem) -> String {
    format!(
        "{} ({}) - {:.1} km",
        item.name,
        item.category,
        item.distance.to_km()
    )
}

pub fn render<W: Write>(
    out: &mut W,
    max_distance_km: f64,
    items: &[DisplayItem],
) -> io::Result<()> {
    writeln!(out, "{}", distance_label(max_distance_km))?;
    if items.is_empty() {
        writeln!(out, "No places found")?;
    }
    for item in items {
        writeln!(out, "  {}", item_line(item))?;
    }
    out.flush()
}
