use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_IDLE, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// `generation` is the ordinal of the live view, `None` when no view exists.
    pub fn widget(&self, generation: Option<u64>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (marker, marker_style, status) = match generation {
            Some(n) => ("●", Style::default().fg(STATUS_OK), format!("view #{n}")),
            None => ("○", Style::default().fg(STATUS_IDLE), "no view".to_string()),
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(marker, marker_style),
            Span::styled("  ", text_style),
            Span::styled("tapcount", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
