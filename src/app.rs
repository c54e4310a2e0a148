use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
};
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::{
    config::Theme,
    errors::SectionedResult,
    keys::{handle_key, handle_mouse},
    model::{Model, RunningState, SectionListModel},
    msg::{update::update, Message},
    view::{view, CHROME_HEIGHT},
};

const EVENT_POLL_TIMEOUT_MILLIS: u64 = 250;

/// Runs the list over `sections` until the user quits.
pub fn run(sections: SectionListModel, theme: Theme) -> SectionedResult<()> {
    let mut model = Model::new(sections, theme)?;
    info!(
        sections = model.sections.section_count(),
        rows = model.ui_model.rows.len(),
        "starting"
    );

    let terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)?;
    let result = run_loop(terminal, &mut model);
    // Restore the terminal even if the loop failed
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    info!("stopped");
    result
}

/// Main run loop which polls events (messages), transforms the model,
/// and renders the UI.
fn run_loop(mut terminal: DefaultTerminal, model: &mut Model) -> SectionedResult<()> {
    while model.running_state != RunningState::Done {
        // Update viewport height for scrolling calculations
        let terminal_height = terminal.size()?.height;
        model
            .ui_model
            .set_viewport_height(terminal_height.saturating_sub(CHROME_HEIGHT) as usize);

        // Every section must have been reloaded since it last changed
        model.ui_model.rows.check_consistency(&model.sections)?;

        terminal.draw(|f| view(model, f))?;

        let mut current_msg = handle_event(model)?;
        while let Some(msg) = current_msg {
            debug!(?msg, "update");
            current_msg = update(model, msg)?;
        }
    }
    Ok(())
}

/// Blocks for [`EVENT_POLL_TIMEOUT_MILLIS`] waiting for an input event.
/// If an event occurred during this time, return what [`Message`]
/// it should trigger.
fn handle_event(model: &Model) -> SectionedResult<Option<Message>> {
    if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MILLIS))? {
        return Ok(None);
    }
    let msg = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(key, model),
        Event::Mouse(mouse) => handle_mouse(mouse, model),
        _ => None,
    };
    Ok(msg)
}
