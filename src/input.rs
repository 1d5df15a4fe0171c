//! Input normalization: event types, click-target registry, and pixel→cell
//! coordinate conversion.
//!
//! Rendering registers rectangular click targets with semantic action IDs
//! every frame; the mouse handler converts the browser's pixel coordinates
//! into a terminal cell and hit-tests against the registry. Keyboard and
//! mouse/touch both collapse into [`InputEvent`], so the game dispatches one
//! event type.

use ratzilla::ratatui::layout::Rect;

/// All possible input events, normalized from keyboard, mouse, and touch.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key press from the keyboard.
    Key(char),
    /// A click/tap on a registered target, identified by a semantic action
    /// ID (see `game::actions`).
    Click(u16),
}

/// A region on screen that can be tapped/clicked to trigger an action.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// Rectangular hit region in terminal cell coordinates.
    pub rect: Rect,
    /// Semantic action ID.
    pub action_id: u16,
}

/// Shared state between the render loop and the click handler.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    /// Drop all targets. Called at the top of every frame before rendering
    /// re-registers the current ones.
    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    /// Register a click target with a rectangular hit region.
    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Convenience: register a full-width target on one row of `area`.
    /// Rows outside the area are silently ignored.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.targets.push(ClickTarget {
                rect: Rect::new(area.x, row, area.width, 1),
                action_id,
            });
        }
    }

    /// Register click targets for a horizontal tab bar from the rendered
    /// label widths.
    ///
    /// Each entry in `tab_widths` is `(display_width, action_id)` for the
    /// padded label text of that tab; `separator_width` is the display width
    /// of the string drawn between tabs. Target boundaries sit on the
    /// midpoint of each separator, the first tab extends to the left edge
    /// and the last to the right edge, so the whole bar is tappable with no
    /// dead columns.
    pub fn register_tab_targets(
        &mut self,
        tab_widths: &[(u16, u16)],
        separator_width: u16,
        x: u16,
        y: u16,
        total_width: u16,
        height: u16,
    ) {
        let n = tab_widths.len();
        if n == 0 || total_width == 0 {
            return;
        }

        // Starting column of each tab label within the bar.
        let mut starts: Vec<u16> = Vec::with_capacity(n);
        let mut cursor: u16 = 0;
        for (i, &(w, _)) in tab_widths.iter().enumerate() {
            if i > 0 {
                cursor += separator_width;
            }
            starts.push(cursor);
            cursor += w;
        }

        for i in 0..n {
            let (_, action_id) = tab_widths[i];

            let left = if i == 0 {
                0
            } else {
                let prev_end = starts[i - 1] + tab_widths[i - 1].0;
                prev_end + (starts[i] - prev_end) / 2
            };
            let right = if i == n - 1 {
                total_width
            } else {
                let cur_end = starts[i] + tab_widths[i].0;
                cur_end + (starts[i + 1] - cur_end) / 2
            };

            let w = right.saturating_sub(left);
            if w > 0 {
                self.add_click_target(Rect::new(x + left, y, w, height), action_id);
            }
        }
    }

    /// Hit-test a terminal cell against all registered targets. Later
    /// registrations win on overlap, matching UI layering where elements
    /// drawn later sit on top.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.action_id)
            } else {
                None
            }
        })
    }
}

/// Whether a screen width (in columns) gets the stacked narrow layout
/// (no side log panel, compact labels).
pub fn is_narrow_layout(width: u16) -> bool {
    width < 80
}

/// Convert a pixel Y coordinate (relative to the grid container's top edge)
/// to a terminal row. Returns `None` outside the grid or on invalid input.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    if grid_height <= 0.0 || terminal_rows == 0 || click_y < 0.0 {
        return None;
    }
    let cell_height = grid_height / terminal_rows as f64;
    let row = (click_y / cell_height) as u16;
    if row >= terminal_rows {
        return None;
    }
    Some(row)
}

/// Convert a pixel X coordinate (relative to the grid container's left edge)
/// to a terminal column.
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    if grid_width <= 0.0 || terminal_cols == 0 || click_x < 0.0 {
        return None;
    }
    let cell_width = grid_width / terminal_cols as f64;
    let col = (click_x / cell_width) as u16;
    if col >= terminal_cols {
        return None;
    }
    Some(col)
}
