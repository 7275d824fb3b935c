//! Viewport width and the compact-layout breakpoint

/// Widths at or below this are laid out compactly.
pub const COMPACT_MAX_WIDTH: u32 = 768;

/// Nominal cell width used when the terminal does not report pixels.
pub const CELL_WIDTH_PX: u32 = 8;

/// Width assumed before the first measurement (a 120-column terminal).
pub const DEFAULT_WIDTH: u32 = 120 * CELL_WIDTH_PX;

pub fn is_compact(width: u32) -> bool {
    width <= COMPACT_MAX_WIDTH
}

/// Convert a terminal size into width units.
///
/// `pixel_width` is what the terminal reports via `TIOCGWINSZ`; many
/// terminals report 0, in which case the column count is scaled instead.
pub fn width_units(columns: u16, pixel_width: u16) -> u32 {
    if pixel_width > 0 {
        u32::from(pixel_width)
    } else {
        u32::from(columns) * CELL_WIDTH_PX
    }
}

/// Measure the current terminal, for the first layout decision at mount.
pub fn measure() -> std::io::Result<u32> {
    let size = crossterm::terminal::window_size()?;
    Ok(width_units(size.columns, size.width))
}

/// Width for a resize event. The event only carries cells, so pixels are
/// queried again; a failed query falls back to the scaled column count.
pub fn width_for_resize(columns: u16) -> u32 {
    match crossterm::terminal::window_size() {
        Ok(size) if size.columns == columns => width_units(columns, size.width),
        _ => width_units(columns, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_inclusive() {
        assert!(is_compact(768));
        assert!(!is_compact(769));
        assert!(is_compact(0));
    }

    #[test]
    fn test_width_units_prefers_pixels() {
        assert_eq!(width_units(80, 1280), 1280);
        assert_eq!(width_units(80, 0), 640);
        assert_eq!(width_units(96, 0), 768);
        assert_eq!(width_units(97, 0), 776);
    }

    #[test]
    fn test_default_width_is_wide() {
        assert!(!is_compact(DEFAULT_WIDTH));
    }
}
