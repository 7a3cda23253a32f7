use ratatui::layout::Rect;
use ratatui::widgets::Borders;

/// Horizontal padding between the control's border and its label.
const CONTROL_PADDING: u16 = 2;
const CONTROL_HEIGHT: u16 = 3;

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

/// Rectangle of `width` x `height` centered in `area`, clamped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Placement of the activatable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlLayout {
    pub area: Rect,
    pub borders: Borders,
}

/// Where the activatable control sits inside the body for a given label.
///
/// The control is as wide as the label plus padding when the body allows it.
/// When even the bare label plus side borders does not fit, the side borders
/// are dropped, and the control grows taller so the word-wrapped label stays
/// readable. Used both for drawing and for mouse hit testing.
pub fn control_layout(body: Rect, label: &str) -> ControlLayout {
    let label_width = label.chars().count() as u16;
    let (width, borders, side) = if body.width >= label_width.saturating_add(2) {
        let width = label_width
            .saturating_add(2 * CONTROL_PADDING + 2)
            .min(body.width);
        (width, Borders::ALL, 2)
    } else {
        (body.width, Borders::TOP | Borders::BOTTOM, 0)
    };
    let inner_width = width.saturating_sub(side).max(1);
    let lines = wrapped_line_count(label, inner_width);
    let height = lines.saturating_add(CONTROL_HEIGHT - 1);
    ControlLayout {
        area: centered_rect_by_size(body, width, height),
        borders,
    }
}

pub fn control_rect(body: Rect, label: &str) -> Rect {
    control_layout(body, label).area
}

/// Rows a greedy word wrap of `text` into `width` columns needs.
///
/// Words longer than the width are split across rows.
pub fn wrapped_line_count(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut lines = 0usize;
    let mut current = 0usize;
    for word in text.split_whitespace() {
        let mut len = word.chars().count();
        if current > 0 && current + 1 + len <= width {
            current += 1 + len;
            continue;
        }
        if current > 0 {
            lines += 1;
        }
        while len > width {
            lines += 1;
            len -= width;
        }
        current = len;
    }
    if current > 0 {
        lines += 1;
    }
    lines.max(1) as u16
}
