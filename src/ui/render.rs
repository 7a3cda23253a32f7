use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{control_layout, layout_regions};
use crate::ui::theme::{ACCENT, CONTROL_BORDER};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.generation()), header);
    frame.render_widget(Clear, body);

    if let Some(view) = app.view() {
        let rendered = view.render();
        let control = control_layout(body, &rendered.label);
        if !control.area.is_empty() {
            let widget = Paragraph::new(rendered.label)
                .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(control.borders)
                        .border_style(Style::default().fg(CONTROL_BORDER)),
                );
            frame.render_widget(widget, control.area);
        }
    }

    frame.render_widget(Footer, footer);
}
