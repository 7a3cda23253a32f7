use crate::ui::counter::CounterView;
use crate::ui::layout::{body_rect, control_rect};
use ratatui::layout::{Position, Rect};

/// Host-side application state.
///
/// The app owns the counter view's lifetime: it creates the view on
/// startup, delivers activation events to it, and tears it down on exit
/// or when the user asks for a fresh view.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    view: Option<CounterView>,
    /// Ordinal of the live view; increments on every creation.
    generation: u64,
    /// Host-level redraw request (lifecycle changes, resize).
    redraw: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            size: None,
            view: None,
            generation: 0,
            redraw: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view(&self) -> Option<&CounterView> {
        self.view.as_ref()
    }

    /// Ordinal of the live view, `None` when no view exists.
    pub fn generation(&self) -> Option<u64> {
        self.view.as_ref().map(|_| self.generation)
    }

    /// Instantiate a view with fresh state. Replaces any existing view.
    pub fn create_view(&mut self) {
        self.generation += 1;
        self.view = Some(CounterView::new());
        self.redraw = true;
        tracing::info!(generation = self.generation, "counter view created");
    }

    pub fn destroy_view(&mut self) {
        if let Some(view) = self.view.take() {
            self.redraw = true;
            tracing::info!(
                generation = self.generation,
                final_count = view.count(),
                "counter view destroyed"
            );
        }
    }

    pub fn recreate_view(&mut self) {
        self.destroy_view();
        self.create_view();
    }

    /// Deliver an activation event to the live view, if any.
    pub fn activate(&mut self) {
        if let Some(view) = self.view.as_mut() {
            view.on_activate();
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.redraw = true;
    }

    /// Screen rectangle of the activatable control, once the size is known.
    pub fn control_area(&self) -> Option<Rect> {
        let (cols, rows) = self.size?;
        let view = self.view.as_ref()?;
        let body = body_rect(Rect::new(0, 0, cols, rows));
        Some(control_rect(body, &view.render().label))
    }

    pub fn control_contains(&self, column: u16, row: u16) -> bool {
        self.control_area()
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    /// Returns whether anything changed since the last draw, and clears the request.
    pub fn take_redraw(&mut self) -> bool {
        let view_changed = self
            .view
            .as_mut()
            .is_some_and(CounterView::take_render_request);
        std::mem::take(&mut self.redraw) | view_changed
    }
}
