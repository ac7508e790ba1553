use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use slidr_deck::Deck;

use super::{App, PresentationOutcome, PresenterOptions};

const ANIMATION_TICK: Duration = Duration::from_millis(16);
const IDLE_TICK: Duration = Duration::from_millis(50);

/// Construct an [`App`] for the deck and present it until the user quits.
pub fn run(deck: Deck, options: PresenterOptions) -> Result<PresentationOutcome> {
    let mut app = App::new(deck, options);
    app.run()
}

impl App {
    /// Pump the terminal event loop until the user leaves the presentation.
    pub fn run(&mut self) -> Result<PresentationOutcome> {
        let mut terminal = ratatui::init();
        if let Err(err) = execute!(stdout(), EnableMouseCapture) {
            log::warn!("mouse capture unavailable: {err}");
        }
        if let Err(err) = terminal.clear() {
            let _ = execute!(stdout(), DisableMouseCapture);
            ratatui::restore();
            return Err(err.into());
        }

        let (event_tx, event_rx) = mpsc::channel();
        let event_loop_running = Arc::new(AtomicBool::new(true));
        let event_loop_flag = Arc::clone(&event_loop_running);

        let event_thread = thread::spawn(move || -> Result<()> {
            while event_loop_flag.load(Ordering::Relaxed) {
                if event::poll(IDLE_TICK)? {
                    let event = event::read()?;
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(())
        });

        let mut pending_events = VecDeque::new();

        let result: Result<PresentationOutcome> = 'event_loop: loop {
            loop {
                match event_rx.try_recv() {
                    Ok(Event::Resize(_, _)) => {}
                    Ok(event) => pending_events.push_back(event),
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        break 'event_loop Err(anyhow!("input event channel disconnected"));
                    }
                }
            }

            if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
                break Err(err.into());
            }

            let mut maybe_outcome = None;
            while let Some(event) = pending_events.pop_front() {
                match event {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if let Some(outcome) = self.handle_key(key) {
                            maybe_outcome = Some(outcome);
                            break;
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            if let Some(outcome) = maybe_outcome {
                break Ok(outcome);
            }

            let tick = if self.is_animating() {
                ANIMATION_TICK
            } else {
                IDLE_TICK
            };
            thread::sleep(tick);
        };

        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        event_loop_running.store(false, Ordering::Relaxed);
        match event_thread.join() {
            Ok(join_result) => join_result?,
            Err(err) => std::panic::resume_unwind(err),
        }

        result
    }
}
