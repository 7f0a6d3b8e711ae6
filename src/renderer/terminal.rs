use crate::config::RendererConfig;
use crate::shared::RenderEvent;
use crossbeam_channel as cbc;
use log::trace;
use std::io::{self, Write};
use std::thread::sleep;
use std::time::Duration;

// Shaft columns per floor
const SCALE: f32 = 4.0;

/**
 * # Terminal Renderer
 * Draws the elevator's movement as text.
 *
 * Consumes render events from the dispatcher until every sender is dropped. Each
 * position is drawn as a one-line shaft that is redrawn in place, paced by
 * `step_delay`. The pacing only slows the renderer; the dispatcher never waits
 * on it.
 *
 * # Fields
 *
 * - `out`:             Where frames and messages are written.
 * - `total_floors`:    Number of floors drawn in the shaft.
 * - `animate`:         Whether to draw position frames at all.
 * - `step_delay`:      Pause after each position frame.
 * - `render_rx`:       Receiver for render events.
 * - `render_done_tx`:  Signals that a processing run has been fully drawn.
 */
pub struct TerminalRenderer<W: Write> {
    out: W,
    total_floors: u8,
    animate: bool,
    step_delay: Duration,
    render_rx: cbc::Receiver<RenderEvent>,
    render_done_tx: cbc::Sender<()>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(
        config: &RendererConfig,
        total_floors: u8,
        out: W,
        render_rx: cbc::Receiver<RenderEvent>,
        render_done_tx: cbc::Sender<()>,
    ) -> TerminalRenderer<W> {
        TerminalRenderer {
            out,
            total_floors,
            animate: config.animate,
            step_delay: Duration::from_millis(config.step_delay_ms),
            render_rx,
            render_done_tx,
        }
    }

    /// Runs until the dispatcher side of the channel is closed, then hands back the writer.
    pub fn run(mut self) -> W {
        while let Ok(event) = self.render_rx.recv() {
            let complete = event == RenderEvent::ProcessingComplete;
            if let Err(e) = self.handle_event(event) {
                trace!("Failed to draw render event: {}", e);
            }

            // Signalled even if drawing failed, the menu is waiting on it
            if complete {
                let _ = self.render_done_tx.send(());
            }
        }
        self.out
    }

    fn handle_event(&mut self, event: RenderEvent) -> io::Result<()> {
        match event {
            RenderEvent::Departing { to, direction, .. } => {
                writeln!(self.out, "Moving {} to floor {}...", direction, to)?;
            }
            RenderEvent::Position { position, label } => {
                if self.animate {
                    write!(self.out, "\r{}", shaft_frame(position, self.total_floors, &label))?;
                    self.out.flush()?;
                    if !self.step_delay.is_zero() {
                        sleep(self.step_delay);
                    }
                }
            }
            RenderEvent::Arrived { floor } => {
                if self.animate {
                    let label = format!("Floor: {}", floor);
                    writeln!(
                        self.out,
                        "\r{}",
                        shaft_frame(f32::from(floor), self.total_floors, &label)
                    )?;
                } else {
                    writeln!(self.out, "Floor: {}", floor)?;
                }
            }
            RenderEvent::AlreadyThere { floor } => {
                writeln!(self.out, "Already at floor {}.", floor)?;
            }
            RenderEvent::ProcessingComplete => {
                writeln!(self.out, "All requests processed. Ready for new commands.")?;
                self.out.flush()?;
            }
        }
        Ok(())
    }
}

/// One line of shaft with the car drawn at `position`, followed by `label`.
pub fn shaft_frame(position: f32, total_floors: u8, label: &str) -> String {
    let top = f32::from(total_floors.saturating_sub(1));
    let width = (top * SCALE) as usize + 1;
    let car = (position.clamp(0.0, top) * SCALE).round() as usize;

    let shaft: String = (0..width)
        .map(|col| {
            if col == car {
                '#'
            } else if col % SCALE as usize == 0 {
                ':'
            } else {
                '.'
            }
        })
        .collect();

    format!("|{}| {}", shaft, label)
}
