// Scroll progress smoothing and active-section detection.

use super::config::ScrollParams;
use super::constants::PROGRESS_MAX;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Top,
    About,
    App,
    Skills,
}

impl SectionId {
    /// Page order, top to bottom.
    pub const ALL: [SectionId; 4] = [
        SectionId::Top,
        SectionId::About,
        SectionId::App,
        SectionId::Skills,
    ];

    /// DOM id of the section element.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Top => "top",
            SectionId::About => "about",
            SectionId::App => "app",
            SectionId::Skills => "skills",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or(())
    }
}

/// Layout snapshot taken on a scroll event.
#[derive(Clone, Debug, Default)]
pub struct ScrollMetrics {
    pub scroll_y: f32,
    pub viewport_height: f32,
    pub document_height: f32,
    /// Registered sections with their top offsets, in page order.
    pub sections: Vec<(SectionId, f32)>,
}

/// Percentage of the scrollable range covered, `0` when nothing scrolls.
pub fn scroll_target(scroll_top: f32, document_height: f32, viewport_height: f32) -> f32 {
    let max_scroll = document_height - viewport_height;
    if max_scroll.is_nan() || max_scroll <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / max_scroll * PROGRESS_MAX).clamp(0.0, PROGRESS_MAX)
}

/// Bottom-most section whose top has crossed the activation line
/// `scroll_y + viewport_height * fraction`.
pub fn active_section(
    sections: &[(SectionId, f32)],
    scroll_y: f32,
    viewport_height: f32,
    fraction: f32,
) -> Option<SectionId> {
    let line = scroll_y + viewport_height * fraction;
    sections
        .iter()
        .rev()
        .find(|(_, top)| *top <= line)
        .map(|(id, _)| *id)
}

#[derive(Clone, Debug)]
pub struct ScrollTracker {
    params: ScrollParams,
    target: f32,
    current: f32,
    active: SectionId,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(ScrollParams::default())
    }
}

impl ScrollTracker {
    pub fn new(params: ScrollParams) -> Self {
        Self {
            params,
            target: 0.0,
            current: 0.0,
            active: SectionId::default(),
        }
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Update the target and the active section. Returns the new section
    /// when it changed.
    pub fn on_scroll(&mut self, m: &ScrollMetrics) -> Option<SectionId> {
        self.target = scroll_target(m.scroll_y, m.document_height, m.viewport_height);
        let found = active_section(
            &m.sections,
            m.scroll_y,
            m.viewport_height,
            self.params.activation_fraction,
        )?;
        self.select(found)
    }

    /// Mark a section active directly, e.g. from a nav click.
    pub fn select(&mut self, section: SectionId) -> Option<SectionId> {
        if section == self.active {
            return None;
        }
        self.active = section;
        Some(section)
    }

    /// One smoothing step toward the target; returns the displayed value.
    pub fn step(&mut self) -> f32 {
        self.current += (self.target - self.current) * self.params.ease;
        self.current
    }
}
