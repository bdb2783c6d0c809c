//! Keyboard input dispatch — overlays first, then global keys, then the selector.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return;
    }

    // 1. Overlays consume input first.
    if app.overlay == Overlay::Help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.overlay = Overlay::None;
        }
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        _ => {}
    }

    // 3. Selector.
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.selector.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.selector.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selector.move_first(),
        KeyCode::Char('G') | KeyCode::End => app.selector.move_last(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.choose_highlighted();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use std::sync::mpsc;

    use crate::worker::WorkerCommand;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> (AppState, mpsc::Receiver<WorkerCommand>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (_resp_tx, resp_rx) = mpsc::channel();
        (AppState::new(cmd_tx, resp_rx, "test"), cmd_rx)
    }

    #[test]
    fn navigate_and_choose() {
        let (mut app, cmd_rx) = test_app();
        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Down));
        handle_key(&mut app, press(KeyCode::Enter));

        assert_eq!(app.viewer.selection().unwrap().ticker, "SKY");
        assert!(app.viewer.is_loading());
        assert!(matches!(cmd_rx.try_recv(), Ok(WorkerCommand::Fetch(_))));
    }

    #[test]
    fn release_events_ignored() {
        let (mut app, _cmd_rx) = test_app();
        let mut key = press(KeyCode::Down);
        key.kind = KeyEventKind::Release;
        key.state = KeyEventState::NONE;
        handle_key(&mut app, key);
        assert_eq!(app.selector.cursor, 0);
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let (mut app, _cmd_rx) = test_app();
        handle_key(&mut app, press(KeyCode::Char('?')));
        assert_eq!(app.overlay, Overlay::Help);

        handle_key(&mut app, press(KeyCode::Down));
        assert_eq!(app.selector.cursor, 0);
        assert!(app.running);

        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.running);
    }

    #[test]
    fn quit_keys() {
        let (mut app, _cmd_rx) = test_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);

        let (mut app, _cmd_rx) = test_app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.running);
    }

    #[test]
    fn jump_to_ends() {
        let (mut app, _cmd_rx) = test_app();
        handle_key(&mut app, press(KeyCode::Char('G')));
        assert_eq!(app.selector.cursor, 10);
        handle_key(&mut app, press(KeyCode::Char('g')));
        assert_eq!(app.selector.cursor, 0);
    }
}
