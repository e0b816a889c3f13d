//! Side-panel layout state machine.
//!
//! Widths and breakpoints are measured in layout units ("px"). The terminal
//! host maps cells to units at a fixed scale (`CELL_PX`) so a 160-column
//! terminal reads as a 1280 px desktop viewport.

pub const MOBILE_BREAKPOINT: u16 = 768;
pub const DESKTOP_BREAKPOINT: u16 = 1024;

pub const MIN_PANEL_WIDTH: u16 = 200;
pub const MAX_PANEL_WIDTH: u16 = 400;
pub const DEFAULT_PANEL_WIDTH: u16 = 280;
/// Width of the icon rail shown when the panel is collapsed.
pub const COLLAPSED_RAIL_WIDTH: u16 = 64;

/// Layout units per terminal cell.
pub const CELL_PX: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Tablet,
    Mobile,
}

impl DeviceClass {
    #[must_use]
    pub fn from_width(width: u16) -> Self {
        if width < MOBILE_BREAKPOINT {
            DeviceClass::Mobile
        } else if width < DESKTOP_BREAKPOINT {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }
}

/// The composite states the panel can occupy. `TabletExpanded` is reachable
/// only through an explicit toggle while on Tablet; entering Tablet always
/// lands in `TabletCollapsed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    DesktopExpanded,
    DesktopCollapsed,
    TabletCollapsed,
    TabletExpanded,
    MobileClosed,
    MobileOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutState {
    pub device: DeviceClass,
    pub collapsed: bool,
    pub mobile_open: bool,
    /// Panel width in layout units. Meaningful only on Desktop with the
    /// panel expanded; renderers ignore it everywhere else.
    pub width: u16,
    pub resizing: bool,
}

#[must_use]
pub fn clamp_width(x: u16) -> u16 {
    x.clamp(MIN_PANEL_WIDTH, MAX_PANEL_WIDTH)
}

impl LayoutState {
    #[must_use]
    pub fn new(viewport_width: u16, default_panel_width: u16) -> Self {
        let device = DeviceClass::from_width(viewport_width);
        Self {
            device,
            collapsed: device == DeviceClass::Tablet,
            mobile_open: false,
            width: clamp_width(default_panel_width),
            resizing: false,
        }
    }

    #[must_use]
    pub fn composite(&self) -> Composite {
        match (self.device, self.collapsed, self.mobile_open) {
            (DeviceClass::Desktop, false, _) => Composite::DesktopExpanded,
            (DeviceClass::Desktop, true, _) => Composite::DesktopCollapsed,
            (DeviceClass::Tablet, true, _) => Composite::TabletCollapsed,
            (DeviceClass::Tablet, false, _) => Composite::TabletExpanded,
            (DeviceClass::Mobile, _, true) => Composite::MobileOpen,
            (DeviceClass::Mobile, _, false) => Composite::MobileClosed,
        }
    }

    /// Viewport resize. Crossing into Mobile drops the overlay and aborts
    /// any in-flight drag; crossing into Tablet auto-collapses. Crossing
    /// back into Desktop does not auto-restore: the last collapsed value in
    /// effect stays until the next explicit toggle.
    pub fn viewport_changed(&mut self, width: u16) {
        let next = DeviceClass::from_width(width);
        let entered = next != self.device;
        self.device = next;
        match next {
            DeviceClass::Mobile => {
                if entered {
                    self.mobile_open = false;
                }
                self.resizing = false;
            }
            DeviceClass::Tablet => {
                if entered {
                    self.collapsed = true;
                }
                self.resizing = false;
            }
            DeviceClass::Desktop => {
                if self.collapsed {
                    self.resizing = false;
                }
            }
        }
    }

    /// Manual toggle: flips the overlay on Mobile, the collapsed flag
    /// everywhere else.
    pub fn toggle_panel(&mut self) {
        if self.device == DeviceClass::Mobile {
            self.mobile_open = !self.mobile_open;
        } else {
            self.collapsed = !self.collapsed;
            if self.collapsed {
                self.resizing = false;
            }
        }
    }

    /// Backdrop click or navigation while the mobile overlay is up.
    /// Vacuous everywhere else.
    pub fn close_overlay(&mut self) {
        if self.device == DeviceClass::Mobile {
            self.mobile_open = false;
        }
    }

    /// Pointer-down on the drag handle. Returns whether a session started;
    /// only a Desktop viewport with the panel expanded has a handle.
    pub fn begin_resize(&mut self) -> bool {
        if self.device == DeviceClass::Desktop && !self.collapsed {
            self.resizing = true;
        }
        self.resizing
    }

    /// Pointer-move during a session: the absolute pointer position, not a
    /// delta, is the sole input.
    pub fn resize_to(&mut self, pointer_x: u16) {
        if self.resizing {
            self.width = clamp_width(pointer_x);
        }
    }

    pub fn end_resize(&mut self) {
        self.resizing = false;
    }

    /// Width the host should reserve for the panel, in layout units.
    #[must_use]
    pub fn panel_width(&self) -> u16 {
        match self.composite() {
            Composite::DesktopExpanded => self.width,
            Composite::TabletExpanded => DEFAULT_PANEL_WIDTH,
            Composite::DesktopCollapsed | Composite::TabletCollapsed => COLLAPSED_RAIL_WIDTH,
            Composite::MobileClosed | Composite::MobileOpen => 0,
        }
    }

    /// The drag handle exists only on Desktop with the panel expanded.
    #[must_use]
    pub fn has_drag_handle(&self) -> bool {
        self.composite() == Composite::DesktopExpanded
    }
}
