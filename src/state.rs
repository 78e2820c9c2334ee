use crate::constants::{MAX_PIXEL_RATIO, SECTION_COUNT};

/// Window dimensions in logical pixels; recomputed on every resize.
#[derive(Clone, Copy, Debug)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

/// Normalized cursor offset from the viewport center, each axis in [-0.5, 0.5].
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

impl PointerOffset {
    pub fn from_client(client_x: f32, client_y: f32, viewport: ViewportSize) -> Self {
        let w = viewport.width.max(1.0);
        let h = viewport.height.max(1.0);
        Self {
            x: (client_x / w - 0.5).clamp(-0.5, 0.5),
            y: (client_y / h - 0.5).clamp(-0.5, 0.5),
        }
    }
}

/// Raw scroll distance plus the derived discrete section index.
#[derive(Default, Clone, Copy, Debug)]
pub struct ScrollState {
    pub raw_offset: f32,
    pub section: usize,
}

/// Nearest section for a scroll offset, clamped to the valid mesh range.
///
/// The index must stay a valid position in the section-mesh list even when the
/// page scrolls past the last section.
pub fn section_for_offset(raw_offset: f32, viewport_height: f32) -> usize {
    let h = viewport_height.max(1.0);
    let idx = (raw_offset / h).round().max(0.0) as usize;
    idx.min(SECTION_COUNT - 1)
}

/// All event-driven state, owned in one place and mutated through one method
/// per event type.
#[derive(Default, Clone, Copy, Debug)]
pub struct AppState {
    pub viewport: ViewportSize,
    pub pointer: PointerOffset,
    pub scroll: ScrollState,
}

impl AppState {
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    pub fn apply_resize(&mut self, width: f32, height: f32) {
        self.viewport = ViewportSize { width, height };
    }

    pub fn apply_pointer(&mut self, client_x: f32, client_y: f32) {
        self.pointer = PointerOffset::from_client(client_x, client_y, self.viewport);
    }

    /// Record a scroll event. Returns the new section index exactly when the
    /// crossing changed it, so the caller can trigger the rotation tween once
    /// per crossing; repeated events inside a section return `None`.
    pub fn apply_scroll(&mut self, raw_offset: f32) -> Option<usize> {
        self.scroll.raw_offset = raw_offset;
        let new_section = section_for_offset(raw_offset, self.viewport.height);
        if new_section != self.scroll.section {
            self.scroll.section = new_section;
            Some(new_section)
        } else {
            None
        }
    }
}

/// Device pixel ratio used for the canvas backing store, capped at 2.
#[inline]
pub fn clamp_pixel_ratio(dpr: f64) -> f64 {
    dpr.min(MAX_PIXEL_RATIO).max(0.0)
}

/// Parse a `#rrggbb` color into linear-ish [0,1] rgb components.
pub fn parse_hex_color(s: &str) -> Option<[f32; 3]> {
    let hex = s.trim().strip_prefix('#')?;
    // Byte-wise check so multi-byte input can never land a slice mid-char
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ])
}
