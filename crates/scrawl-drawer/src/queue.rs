//! The per-frame shape queue.
//!
//! Shape actions append resolved commands during the frame's binding phase;
//! the entity's draw pass consumes the whole queue in enqueue order and
//! empties it unconditionally. Later shapes paint over earlier ones; there
//! is no z-sorting and nothing survives into the next frame.

use scrawl_scene::shape::ShapeCommand;
use scrawl_scene::surface::RenderSurface;

/// An ordered, per-frame-cleared collection of pending draw commands.
#[derive(Debug, Clone, Default)]
pub struct ShapeQueue {
    commands: Vec<ShapeCommand>,
}

impl ShapeQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command. Draw order equals enqueue order.
    pub fn enqueue(&mut self, command: ShapeCommand) {
        tracing::trace!(?command.kind, "enqueue shape");
        self.commands.push(command);
    }

    /// Rasterize every queued command in order, then empty the queue.
    ///
    /// Commands with degenerate geometry are skipped silently; the queue is
    /// cleared even so. The returned flag reports frame-level success to the
    /// host (queued drawing itself has no per-shape failure path).
    pub fn draw_all(&mut self, surface: &mut dyn RenderSurface) -> bool {
        for command in &self.commands {
            if !command.is_drawable() {
                tracing::debug!(?command.kind, "skipping malformed shape command");
                continue;
            }
            surface.draw_shape(command);
        }
        self.commands.clear();
        true
    }

    /// Number of pending commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no commands are pending.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The pending commands, in enqueue order.
    pub fn commands(&self) -> &[ShapeCommand] {
        &self.commands
    }
}
