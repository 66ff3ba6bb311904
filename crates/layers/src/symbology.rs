use catalog::{CatalogError, ElectionCatalog};

/// Convert a packed 0xRRGGBB value to an RGBA color.
pub fn rgb_to_color(rgb: u32) -> [f32; 4] {
    let r = ((rgb >> 16) & 0xFF) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xFF) as f32 / 255.0;
    let b = (rgb & 0xFF) as f32 / 255.0;
    [r, g, b, 1.0]
}

/// Colors of the parties with nonzero seats in a row, in party order.
///
/// This drives the background palette: the row is either the national totals
/// or a single province's results, whichever is currently shown.
pub fn palette_for_seats(
    catalog: &ElectionCatalog,
    election: usize,
    seats: &[u32],
) -> Result<Vec<[f32; 4]>, CatalogError> {
    let mut palette = Vec::new();
    for (party, &count) in seats.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let rgb = catalog.color(election, party)?.rgb()?;
        palette.push(rgb_to_color(rgb));
    }
    Ok(palette)
}
