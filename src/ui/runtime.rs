use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::notebook::Notebook;
use crate::ui::App;

/// Frame pacing; transitions step once per tick.
const TICK: Duration = Duration::from_millis(16);

/// How long the reader thread blocks waiting for terminal input.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Construct an [`App`] over the notebook and run it to completion.
pub fn run(notebook: Notebook) -> Result<()> {
    let mut app = App::new(notebook);
    app.run()
}

fn spawn_input_reader(
    alive: Arc<AtomicBool>,
    events: mpsc::Sender<Event>,
) -> thread::JoinHandle<Result<()>> {
    thread::spawn(move || {
        while alive.load(Ordering::Relaxed) {
            if event::poll(INPUT_POLL)? && events.send(event::read()?).is_err() {
                break;
            }
        }
        Ok(())
    })
}

impl App {
    /// Pump the terminal event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let (input_tx, input_rx) = mpsc::channel();
        let alive = Arc::new(AtomicBool::new(true));
        let reader = spawn_input_reader(Arc::clone(&alive), input_tx);

        let mut queued: VecDeque<Event> = VecDeque::new();

        let result: Result<()> = 'frames: loop {
            self.advance_transitions();

            // Resize events need no handling beyond the redraw below.
            loop {
                match input_rx.try_recv() {
                    Ok(Event::Resize(_, _)) => {}
                    Ok(event) => queued.push_back(event),
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        break 'frames Err(anyhow!("input reader thread went away"));
                    }
                }
            }

            terminal.draw(|frame| self.draw(frame))?;

            while let Some(event) = queued.pop_front() {
                if let Event::Key(key) = event
                    && key.kind == KeyEventKind::Press
                {
                    self.handle_key(key);
                    if self.quit {
                        break;
                    }
                }
            }

            if self.quit {
                break Ok(());
            }

            thread::sleep(TICK);
        };

        ratatui::restore();

        alive.store(false, Ordering::Relaxed);
        match reader.join() {
            Ok(reader_result) => reader_result?,
            Err(err) => std::panic::resume_unwind(err),
        }

        result
    }
}
