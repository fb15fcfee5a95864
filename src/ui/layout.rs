use ratatui::layout::Rect;

/// Header, body and footer rows of the screen.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Visible part of a scrolled region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    /// Where to draw, in screen coordinates.
    pub screen: Rect,
    /// Rows of the region hidden above the viewport.
    pub skip_rows: u16,
}

/// Map `region` (y relative to the content top) into `viewport` scrolled
/// down by `scroll` rows. `None` when no row is visible.
pub fn project(region: Rect, viewport: Rect, scroll: u16) -> Option<Projection> {
    let top = region.y.max(scroll);
    let bottom = region
        .y
        .saturating_add(region.height)
        .min(scroll.saturating_add(viewport.height));
    if top >= bottom || region.width == 0 {
        return None;
    }
    Some(Projection {
        screen: Rect {
            x: region.x,
            y: viewport.y + (top - scroll),
            width: region.width,
            height: bottom - top,
        },
        skip_rows: top - region.y,
    })
}
