//! Shade and drawer visibility plus the vertical swipe gestures that open them.
//!
//! The two panels toggle independently; opening one never closes the other.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Shade,
    Drawer,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellState {
    shade_open: bool,
    drawer_open: bool,
}

impl ShellState {
    pub fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::Shade => self.shade_open,
            Panel::Drawer => self.drawer_open,
        }
    }

    pub fn set(&mut self, panel: Panel, open: bool) {
        match panel {
            Panel::Shade => self.shade_open = open,
            Panel::Drawer => self.drawer_open = open,
        }
    }

    pub fn open(&mut self, panel: Panel) {
        self.set(panel, true);
    }

    pub fn close(&mut self, panel: Panel) {
        self.set(panel, false);
    }

    pub fn toggle(&mut self, panel: Panel) {
        let open = self.is_open(panel);
        self.set(panel, !open);
    }

    /// Panel drawn on top, which is the one Esc closes first.
    pub fn topmost(&self) -> Option<Panel> {
        if self.shade_open {
            Some(Panel::Shade)
        } else if self.drawer_open {
            Some(Panel::Drawer)
        } else {
            None
        }
    }

    /// Close the topmost panel; false when nothing was open.
    pub fn dismiss_top(&mut self) -> bool {
        match self.topmost() {
            Some(panel) => {
                self.close(panel);
                true
            }
            None => false,
        }
    }
}

/// Screen rows that gate the two gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeZones {
    /// Presses starting above this row can pull the shade down.
    pub top_zone: u16,
    /// Presses starting at or below this row can raise the drawer.
    pub pill_top: u16,
    /// Minimum vertical travel, exclusive.
    pub threshold: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    PullShade,
    RaiseDrawer,
}

/// Remembers where the current press started.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_y: Option<u16>,
}

impl SwipeTracker {
    pub fn begin(&mut self, y: u16) {
        self.start_y = Some(y);
    }

    pub fn cancel(&mut self) {
        self.start_y = None;
    }

    /// Finish the press at `end_y` and classify it.
    pub fn finish(&mut self, end_y: u16, zones: SwipeZones) -> Option<Gesture> {
        let start_y = self.start_y.take()?;
        classify_swipe(start_y, end_y, zones)
    }
}

pub fn classify_swipe(start_y: u16, end_y: u16, zones: SwipeZones) -> Option<Gesture> {
    if start_y < zones.top_zone && end_y > start_y.saturating_add(zones.threshold) {
        return Some(Gesture::PullShade);
    }
    if start_y >= zones.pill_top && end_y < start_y.saturating_sub(zones.threshold) {
        return Some(Gesture::RaiseDrawer);
    }
    None
}

impl Gesture {
    pub fn panel(self) -> Panel {
        match self {
            Gesture::PullShade => Panel::Shade,
            Gesture::RaiseDrawer => Panel::Drawer,
        }
    }
}
