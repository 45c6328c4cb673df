use tracing::{debug, warn};

use crate::animation::AnimatedField;
use crate::core::PaneSize;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{InputEvent, SelectionState};
use crate::render::Renderer;

use super::{ChartController, InvalidationTopic, PaneLayout};

impl<R: Renderer> ChartController<R> {
    /// Applies a new widget size and recomputes both panes.
    ///
    /// A zero-sized widget is rejected and leaves every pane untouched.
    pub fn resize(&mut self, width: u32, height: u32) -> ChartResult<()> {
        let widget = PaneSize::new(width, height);
        if !widget.is_valid() {
            return Err(ChartError::InvalidViewport { width, height });
        }

        self.layout = PaneLayout::compute(widget, &self.config);
        debug!(
            width,
            height,
            main_height = self.layout.main.height,
            overview_height = self.layout.overview.height,
            "resize"
        );

        self.grid.set_pane_height(self.layout.main.height);
        self.selector.set_pane_geometry(
            self.layout.overview.width_px(),
            f64::from(self.layout.overview_top),
            self.layout.overview.height_px(),
        );
        // Pixel scales from the old height no longer apply.
        self.animator.cancel(AnimatedField::VerticalScale);
        self.relayout();
        self.invalidate_all();
        Ok(())
    }

    /// Starts a band drag when the pointer hits the overview band.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> SelectionState {
        let before = self.selector.state();
        let state = self.selector.pointer_down(x, y);
        if state != before {
            self.invalidate(InvalidationTopic::Selection);
        }
        state
    }

    /// Moves the active drag and recomputes the main pane.
    ///
    /// Returns `true` when the band (and therefore the visible range) moved.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        if !self.selector.pointer_move(x, y) {
            return false;
        }
        self.invalidate(InvalidationTopic::Selection);
        self.refresh_main();
        true
    }

    pub fn pointer_up(&mut self) {
        if self.selector.state().is_dragging() {
            self.invalidate(InvalidationTopic::Selection);
        }
        self.selector.pointer_up();
    }

    pub fn pointer_cancel(&mut self) {
        if self.selector.state().is_dragging() {
            self.invalidate(InvalidationTopic::Selection);
        }
        self.selector.pointer_cancel();
    }

    /// Routes one host event. Never fails; a rejected resize is logged.
    pub fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.pointer_down(x, y);
            }
            InputEvent::PointerMove { x, y } => {
                self.pointer_move(x, y);
            }
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::PointerCancel => self.pointer_cancel(),
            InputEvent::Resize { width, height } => {
                if let Err(err) = self.resize(width, height) {
                    warn!(error = %err, "ignoring resize event");
                }
            }
        }
    }

    /// Runs one frame: every queued input event first, then the animation
    /// tick, so a drag always reflects the latest pointer position before an
    /// interpolation step is applied.
    ///
    /// Returns `true` when a redraw is pending.
    pub fn process_frame<I>(&mut self, events: I, now_ms: f64) -> bool
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.dispatch(event);
        }
        self.tick(now_ms);
        self.needs_redraw()
    }
}
