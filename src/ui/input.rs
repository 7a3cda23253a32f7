use crate::ui::app::App;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Host commands reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Activate,
    Recreate,
    Quit,
}

impl Binding {
    /// Display order in the footer.
    pub const ALL: [Binding; 3] = [Binding::Activate, Binding::Recreate, Binding::Quit];

    pub fn keys(self) -> &'static str {
        match self {
            Binding::Activate => "Enter/Space/Click",
            Binding::Recreate => "Ctrl+R",
            Binding::Quit => "q/Esc",
        }
    }

    pub fn action(self) -> &'static str {
        match self {
            Binding::Activate => "Activate",
            Binding::Recreate => "New view",
            Binding::Quit => "Quit",
        }
    }

    pub fn for_key(key: KeyEvent) -> Option<Self> {
        if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
            return Some(Binding::Quit);
        }
        if is_ctrl_char(key, 'r') {
            return Some(Binding::Recreate);
        }
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Binding::Quit),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Binding::Activate),
            _ => None,
        }
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match Binding::for_key(key) {
        Some(Binding::Activate) => app.activate(),
        Some(Binding::Recreate) => app.recreate_view(),
        Some(Binding::Quit) => app.request_quit(),
        None => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if app.control_contains(mouse.column, mouse.row) {
        app.activate();
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
