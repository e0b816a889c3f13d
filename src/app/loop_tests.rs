use super::*;
use crate::app::state::AppState;
use crate::domain::host::MockShellHost;
use crate::domain::models::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

#[tokio::test]
async fn handle_command_reports_navigation() {
    let mut mock = MockShellHost::new();
    mock.expect_navigate()
        .withf(|route| *route == Route::Trades)
        .returning(|_| Ok(()));

    let host = Arc::new(mock);
    let (tx, mut rx) = mpsc::channel(1);

    handle_command(Command::Navigate(Route::Trades), host, tx);

    let action = rx.recv().await.unwrap();
    assert_eq!(
        action,
        Action::HostResult(Ok("Opened Trade Log".to_string()))
    );
}

#[tokio::test]
async fn handle_command_propagates_host_errors() {
    let mut mock = MockShellHost::new();
    mock.expect_execute_action()
        .withf(|id| id == "bot.start")
        .returning(|_| Err(anyhow::anyhow!("broker unreachable")));

    let host = Arc::new(mock);
    let (tx, mut rx) = mpsc::channel(1);

    handle_command(Command::ExecuteAction("bot.start"), host, tx);

    let action = rx.recv().await.unwrap();
    if let Action::HostResult(Err(message)) = action {
        assert!(message.contains("broker unreachable"));
    } else {
        panic!("Expected Action::HostResult(Err), got {action:?}");
    }
}

#[tokio::test]
async fn palette_keystrokes_reach_the_host() {
    let mut mock = MockShellHost::new();
    let (done_tx, mut done_rx) = mpsc::unbounded_channel();
    mock.expect_execute_action()
        .withf(|id| id == "bot.stop")
        .times(1)
        .returning(move |_| {
            let _ = done_tx.send(());
            Ok("Trading bot halted".to_string())
        });

    let host = Arc::new(mock);
    let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);
    let feeder = tokio::spawn(async move {
        let key = |code| Event::Key(KeyEvent::new(code, KeyModifiers::empty()));
        let _ = event_tx
            .send(Ok(Event::Key(KeyEvent::new(
                KeyCode::Char('k'),
                KeyModifiers::CONTROL,
            ))))
            .await;
        for c in "stop bot".chars() {
            let _ = event_tx.send(Ok(key(KeyCode::Char(c)))).await;
        }
        let _ = event_tx.send(Ok(key(KeyCode::Enter))).await;
        // Wait for the host call before quitting so the loop is still
        // alive to receive the result.
        let _ = done_rx.recv().await;
        let _ = event_tx.send(Ok(key(KeyCode::Char('q')))).await;
    });

    tokio::time::timeout(
        std::time::Duration::from_secs(10),
        run_loop_with_events(&mut terminal, app_state, host, event_rx),
    )
    .await
    .expect("loop did not quit")
    .unwrap();

    feeder.await.unwrap();
}

#[tokio::test]
async fn event_fuzzing_never_panics() {
    let mut mock = MockShellHost::new();
    mock.expect_navigate().returning(|_| Ok(()));
    mock.expect_execute_action()
        .returning(|_| Ok("ok".to_string()));

    let host = Arc::new(mock);
    let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);

    let fuzzer = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let event = match rng.gen_range(0..100) {
                0..=9 => {
                    let w = rng.gen_range(10..240);
                    let h = rng.gen_range(10..80);
                    Event::Resize(w, h)
                }
                10..=49 => generate_random_mouse(&mut rng, 160, 48),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Settle into a state where `q` is live again: end any drag,
        // then close a possibly-open palette.
        let _ = event_tx
            .send(Ok(Event::Mouse(crossterm::event::MouseEvent {
                kind: crossterm::event::MouseEventKind::Up(crossterm::event::MouseButton::Left),
                column: 0,
                row: 0,
                modifiers: KeyModifiers::empty(),
            })))
            .await;
        let _ = event_tx
            .send(Ok(Event::Key(KeyEvent::new(
                KeyCode::Esc,
                KeyModifiers::NONE,
            ))))
            .await;
        let _ = event_tx
            .send(Ok(Event::Key(KeyEvent::new(
                KeyCode::Char('q'),
                KeyModifiers::NONE,
            ))))
            .await;
    });

    let result = tokio::time::timeout(
        std::time::Duration::from_secs(120),
        run_loop_with_events(&mut terminal, app_state, host, event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::Backspace,
        _ => {
            let mut c = rng.gen_range(b' '..=b'~') as char;
            // Keep the quit bindings out of the stream so the run
            // does not end on the first stray keystroke.
            if c == 'q' {
                c = 'Q';
            }
            if c == 'c' {
                c = 'C';
            }
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, width: u16, height: u16) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..6) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Up(MouseButton::Left),
        2 => MouseEventKind::Drag(MouseButton::Left),
        3 => MouseEventKind::ScrollUp,
        4 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    Event::Mouse(MouseEvent {
        kind,
        column: rng.gen_range(0..width),
        row: rng.gen_range(0..height),
        modifiers: KeyModifiers::empty(),
    })
}
