// Host page contract: element ids, attributes and classes the front-end expects.

// Background
pub const CANVAS_ID: &str = "background-canvas";
// `data-*` attributes on the canvas that override `FieldParams`
pub const FIELD_OVERRIDE_PREFIX: &str = "data-";

// Scroll indicator
pub const PROGRESS_FILL_ID: &str = "scroll-progress-fill";

// Navigation
pub const NAV_ITEM_SELECTOR: &str = "[data-section]";
pub const NAV_SECTION_ATTR: &str = "data-section";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_SIDEBAR_ID: &str = "nav-sidebar";
pub const NAV_BACKDROP_ID: &str = "nav-backdrop";

// Classes
pub const ACTIVE_CLASS: &str = "active";
pub const OPEN_CLASS: &str = "open";
