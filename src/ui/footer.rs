use crate::ui::input::Binding;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints on the left, version on the right. The version wins when both don't fit.
pub struct Footer;

impl Footer {
    fn hints() -> Line<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::raw(" ")];
        for (idx, binding) in Binding::ALL.into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" │ ", separator_style));
            }
            spans.push(Span::styled(
                format!("{}: {}", binding.keys(), binding.action()),
                text_style,
            ));
        }
        Line::from(spans)
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        Self::hints().render(inner, buf);
        Line::styled(
            format!("v{VERSION} "),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )
        .right_aligned()
        .render(inner, buf);
    }
}
