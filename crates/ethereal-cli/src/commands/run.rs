use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use ethereal_core::form::{deliver, Submission, SubmissionOutcome};
use ethereal_core::AppConfig;
use ethereal_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    ui, App,
};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    // Without a usable terminal, print the page once instead
    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            warn!("Terminal setup failed, rendering static page: {}", e);
            print_static(&config);
            return Ok(());
        }
    };

    let result = run_loop(&mut terminal, config).await;

    // Restore terminal even when the loop failed
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Ethereal")) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_loop(terminal: &mut Term, config: Arc<AppConfig>) -> Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(
        config.clone(),
        Rect::new(0, 0, size.width, size.height),
        Instant::now(),
    );

    let event_handler = EventHandler::new(config.ui.tick_rate(), config.ui.animation_tick());

    // Create channel for simulated form deliveries
    let (form_tx, mut form_rx) = mpsc::unbounded_channel::<SubmissionOutcome>();

    info!("TUI started");

    // Main loop
    loop {
        let now = Instant::now();

        // Process any finished deliveries (non-blocking)
        while let Ok(outcome) = form_rx.try_recv() {
            app.on_submission(outcome, now);
        }

        app.update(now);

        terminal.draw(|frame| ui::draw(frame, &app, now))?;

        // Poll faster while something is moving
        if let Some(event) = event_handler.next(app.needs_fast_update())? {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    app.status_message = None;
                    let action = handle_key_event(key, &app);
                    if let Some(submission) = app.apply(action, now) {
                        spawn_delivery(submission, config.form.send_delay(), form_tx.clone());
                    }
                }
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse, now),
                AppEvent::Resize(width, height) => app.on_resize(width, height, now),
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    app.carousel.destroy();
    info!("TUI stopped");

    Ok(())
}

/// Run the simulated delivery in the background and report back on `tx`
fn spawn_delivery(
    submission: Submission,
    delay: Duration,
    tx: mpsc::UnboundedSender<SubmissionOutcome>,
) {
    tokio::spawn(async move {
        let outcome = deliver(submission, delay).await;
        if tx.send(outcome).is_err() {
            debug!("UI closed before delivery finished");
        }
    });
}

/// Plain-text rendition of the page for terminals that cannot run the TUI
fn print_static(config: &AppConfig) {
    println!("ETHEREAL STUDIOS");
    println!("We craft ethereal digital experiences\n");

    let testimonials = &config.carousel.testimonials;
    if !testimonials.is_empty() {
        println!("What clients say ({}):\n", testimonials.len());
    }
    for (i, testimonial) in testimonials.iter().enumerate() {
        println!("  {}. \u{201c}{}\u{201d}", i + 1, testimonial.quote);
        if testimonial.role.is_empty() {
            println!("     - {}\n", testimonial.author);
        } else {
            println!("     - {}, {}\n", testimonial.author, testimonial.role);
        }
    }

    println!("Get in touch: run `ethereal` in an interactive terminal to use the contact form.");
}
