//! Viewport width classification

/// Widths strictly below this are compact
pub const COMPACT_THRESHOLD_PX: u32 = 768;

/// Approximate pixel width of one terminal cell
pub const CELL_WIDTH_PX: u32 = 8;

/// Binary layout classification of the current viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutReading {
    Compact,
    Wide,
}

impl LayoutReading {
    pub fn for_width(width_px: u32) -> Self {
        if width_px < COMPACT_THRESHOLD_PX {
            Self::Compact
        } else {
            Self::Wide
        }
    }
}

/// Tracks the layout reading across resize events
#[derive(Debug, Clone)]
pub struct ResponsiveObserver {
    width_px: u32,
    reading: LayoutReading,
}

impl ResponsiveObserver {
    pub fn new(width_px: u32) -> Self {
        Self {
            width_px,
            reading: LayoutReading::for_width(width_px),
        }
    }

    /// Observer for a terminal that is `columns` cells wide
    pub fn for_columns(columns: u16) -> Self {
        Self::new(columns_to_px(columns))
    }

    /// Recompute the reading for a new width
    pub fn observe(&mut self, width_px: u32) -> LayoutReading {
        self.width_px = width_px;
        let reading = LayoutReading::for_width(width_px);
        if reading != self.reading {
            tracing::debug!("Layout reading changed to {reading:?} at {width_px}px");
        }
        self.reading = reading;
        reading
    }

    pub fn observe_columns(&mut self, columns: u16) -> LayoutReading {
        self.observe(columns_to_px(columns))
    }

    pub fn reading(&self) -> LayoutReading {
        self.reading
    }

    pub fn is_compact(&self) -> bool {
        self.reading == LayoutReading::Compact
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }
}

fn columns_to_px(columns: u16) -> u32 {
    u32::from(columns) * CELL_WIDTH_PX
}
