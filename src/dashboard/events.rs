use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use crate::timeframe::Timeframe;

/// What the loop has to do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    /// Repaint the current snapshot; the datasets stay as they are.
    Redraw,
    /// Regenerate every dataset, then repaint.
    RenderPass,
    Quit,
}

fn selection(changed: bool) -> KeyOutcome {
    if changed {
        KeyOutcome::Redraw
    } else {
        KeyOutcome::Ignored
    }
}

pub fn handle_key_event(key: KeyEvent, app: &mut App) -> KeyOutcome {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyOutcome::Quit,
        KeyCode::Char('d') | KeyCode::Char('1') => selection(app.select_timeframe(Timeframe::Day)),
        KeyCode::Char('w') | KeyCode::Char('2') => selection(app.select_timeframe(Timeframe::Week)),
        KeyCode::Char('m') | KeyCode::Char('3') => selection(app.select_timeframe(Timeframe::Month)),
        KeyCode::Char('y') | KeyCode::Char('4') => selection(app.select_timeframe(Timeframe::Year)),
        KeyCode::Left => selection(app.previous_timeframe()),
        KeyCode::Right | KeyCode::Tab => selection(app.next_timeframe()),
        KeyCode::Char('r') => KeyOutcome::RenderPass,
        _ => KeyOutcome::Ignored,
    }
}

/// Handle a key and run the render pass it asks for. The terminal loop
/// draws afterwards unless the outcome is `Ignored` or `Quit`.
pub fn dispatch_key(key: KeyEvent, app: &mut App) -> KeyOutcome {
    let outcome = handle_key_event(key, app);
    if outcome == KeyOutcome::RenderPass {
        app.render_pass();
    }
    outcome
}
