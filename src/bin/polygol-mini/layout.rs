//! Screen geometry shared by drawing and mouse hit-testing.

use polygol_mini::apps::APP_CATALOG;
use polygol_mini::controls::CONTROLS;
use polygol_mini::shell::{Panel, ShellState, SwipeZones};
use ratatui::layout::Rect;

pub(crate) const TILE_COLUMNS: usize = 5;
const TILE_HEIGHT: u16 = 3;
const SHADE_HEIGHT: u16 = 2 + 1 + 2 * TILE_HEIGHT + 1;
const DRAWER_HEIGHT: u16 = 2 + 1 + APP_CATALOG.len() as u16;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ScreenLayout {
    pub(crate) area: Rect,
    /// Row with the shade handle; hidden while the drawer is up.
    pub(crate) top_bar: Option<Rect>,
    pub(crate) home: Rect,
    /// Bottom row with the drawer pill; hidden while the drawer is up.
    pub(crate) pill: Option<Rect>,
    pub(crate) shade: Option<Rect>,
    pub(crate) shade_header: Option<Rect>,
    pub(crate) tiles: Vec<Rect>,
    pub(crate) shade_status: Option<Rect>,
    pub(crate) drawer: Option<Rect>,
    pub(crate) app_rows: Vec<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HitTarget {
    TopHandle,
    Pill,
    Tile(usize),
    App(usize),
    /// Inside an open panel but not on anything clickable.
    PanelBody,
    /// Outside every open panel while at least one is open.
    Backdrop,
    Home,
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Area inside a one-cell border.
fn inset(rect: Rect) -> Rect {
    Rect::new(
        rect.x.saturating_add(1),
        rect.y.saturating_add(1),
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    )
}

fn row(rect: Rect, offset: u16) -> Option<Rect> {
    (offset < rect.height).then(|| Rect::new(rect.x, rect.y + offset, rect.width, 1))
}

pub(crate) fn compute_layout(area: Rect, shell: &ShellState) -> ScreenLayout {
    let mut layout = ScreenLayout {
        area,
        home: area,
        ..ScreenLayout::default()
    };

    if !shell.is_open(Panel::Drawer) && area.height >= 3 {
        layout.top_bar = Some(Rect::new(area.x, area.y, area.width, 1));
        layout.pill = Some(Rect::new(area.x, area.bottom() - 1, area.width, 1));
        layout.home = Rect::new(area.x, area.y + 1, area.width, area.height - 2);
    }

    if shell.is_open(Panel::Drawer) {
        let height = DRAWER_HEIGHT.min(area.height);
        let drawer = Rect::new(area.x, area.bottom() - height, area.width, height);
        let inner = inset(drawer);
        layout.app_rows = (0..APP_CATALOG.len() as u16)
            .filter_map(|i| row(inner, i + 1))
            .collect();
        layout.drawer = Some(drawer);
    }

    if shell.is_open(Panel::Shade) {
        let shade = Rect::new(area.x, area.y, area.width, SHADE_HEIGHT.min(area.height));
        let inner = inset(shade);
        layout.shade_header = row(inner, 0);
        let tile_width = inner.width / TILE_COLUMNS as u16;
        for index in 0..CONTROLS.len() {
            let col = (index % TILE_COLUMNS) as u16;
            let tile_row = (index / TILE_COLUMNS) as u16;
            let y_offset = 1 + tile_row * TILE_HEIGHT;
            if y_offset + TILE_HEIGHT > inner.height || tile_width == 0 {
                break;
            }
            layout.tiles.push(Rect::new(
                inner.x + col * tile_width,
                inner.y + y_offset,
                tile_width,
                TILE_HEIGHT,
            ));
        }
        layout.shade_status = row(inner, 1 + 2 * TILE_HEIGHT);
        layout.shade = Some(shade);
    }

    layout
}

/// Gesture rows: the top two rows pull the shade, the bottom two raise the drawer.
pub(crate) fn swipe_zones(area: Rect) -> SwipeZones {
    SwipeZones {
        top_zone: area.y + 2u16.min(area.height),
        pill_top: area.bottom().saturating_sub(2),
        threshold: (area.height / 8).max(2),
    }
}

/// Shade first, since it is drawn on top of the drawer.
pub(crate) fn hit_test(layout: &ScreenLayout, x: u16, y: u16) -> HitTarget {
    if let Some(shade) = layout.shade {
        if contains(shade, x, y) {
            return layout
                .tiles
                .iter()
                .position(|tile| contains(*tile, x, y))
                .map(HitTarget::Tile)
                .unwrap_or(HitTarget::PanelBody);
        }
    }
    if let Some(drawer) = layout.drawer {
        if contains(drawer, x, y) {
            return layout
                .app_rows
                .iter()
                .position(|app| contains(*app, x, y))
                .map(HitTarget::App)
                .unwrap_or(HitTarget::PanelBody);
        }
    }
    if layout.shade.is_some() || layout.drawer.is_some() {
        return HitTarget::Backdrop;
    }
    if layout.top_bar.is_some_and(|bar| contains(bar, x, y)) {
        return HitTarget::TopHandle;
    }
    if layout.pill.is_some_and(|pill| contains(pill, x, y)) {
        return HitTarget::Pill;
    }
    HitTarget::Home
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    #[test]
    fn closed_panels_leave_bar_and_pill() {
        let layout = compute_layout(AREA, &ShellState::default());
        assert_eq!(layout.top_bar, Some(Rect::new(0, 0, 80, 1)));
        assert_eq!(layout.pill, Some(Rect::new(0, 23, 80, 1)));
        assert_eq!(layout.home, Rect::new(0, 1, 80, 22));
        assert_eq!(hit_test(&layout, 10, 0), HitTarget::TopHandle);
        assert_eq!(hit_test(&layout, 10, 23), HitTarget::Pill);
        assert_eq!(hit_test(&layout, 10, 10), HitTarget::Home);
    }

    #[test]
    fn drawer_hides_bar_and_pill() {
        let mut shell = ShellState::default();
        shell.open(Panel::Drawer);
        let layout = compute_layout(AREA, &shell);
        assert_eq!(layout.top_bar, None);
        assert_eq!(layout.pill, None);
        assert_eq!(layout.app_rows.len(), APP_CATALOG.len());
        let first = layout.app_rows[0];
        assert_eq!(hit_test(&layout, first.x + 3, first.y), HitTarget::App(0));
        assert_eq!(hit_test(&layout, 10, 0), HitTarget::Backdrop);
    }

    #[test]
    fn shade_tiles_are_hit_before_drawer() {
        let mut shell = ShellState::default();
        shell.open(Panel::Shade);
        shell.open(Panel::Drawer);
        let layout = compute_layout(AREA, &shell);
        assert_eq!(layout.tiles.len(), CONTROLS.len());
        let last = layout.tiles[CONTROLS.len() - 1];
        assert_eq!(hit_test(&layout, last.x, last.y), HitTarget::Tile(9));
        let header = layout.shade_header.expect("header row");
        assert_eq!(hit_test(&layout, header.x, header.y), HitTarget::PanelBody);
    }

    #[test]
    fn tiny_terminal_drops_tiles_that_do_not_fit() {
        let mut shell = ShellState::default();
        shell.open(Panel::Shade);
        let layout = compute_layout(Rect::new(0, 0, 40, 6), &shell);
        assert_eq!(layout.tiles.len(), TILE_COLUMNS);
    }

    #[test]
    fn zones_scale_with_height() {
        let zones = swipe_zones(AREA);
        assert_eq!(zones.top_zone, 2);
        assert_eq!(zones.pill_top, 22);
        assert_eq!(zones.threshold, 3);
    }
}
