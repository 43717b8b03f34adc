//! Terminal chat UI: event loop, background chat calls, progressive reveal.

mod app;
mod constants;
mod draw;
mod reveal;
mod text;

use std::io;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::execute;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::core::admin;
use crate::core::chat::{self, ChatError, ChatReply, ChatRequest, Turn};
use crate::core::config::Config;
use crate::core::format::FormatOptions;
use crate::core::history::History;

use app::App;
use draw::draw;

/// A chat request running on a background thread.
struct PendingChat {
    result_rx: mpsc::Receiver<Result<ChatReply, ChatError>>,
    cancel_token: CancellationToken,
}

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Spawn a chat request. The cancel token aborts the in-flight API call.
fn spawn_chat(
    rt: &Arc<Runtime>,
    config: Arc<Config>,
    message: String,
    history: Vec<Turn>,
) -> PendingChat {
    let (result_tx, result_rx) = mpsc::channel();
    let cancel_token = CancellationToken::new();
    let cancel_token_clone = cancel_token.clone();
    let rt_clone = Arc::clone(rt);

    thread::spawn(move || {
        let result = rt_clone.block_on(chat::chat(ChatRequest {
            config: config.as_ref(),
            message: &message,
            history: &history,
            options: FormatOptions::default(),
            cancel_token: Some(cancel_token_clone),
        }));
        let _ = result_tx.send(result);
    });

    PendingChat {
        result_rx,
        cancel_token,
    }
}

/// Spawn a title request for the conversation's first message.
fn spawn_title_fetch(
    rt: &Arc<Runtime>,
    config: Arc<Config>,
    message: String,
) -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    let rt_clone = Arc::clone(rt);
    thread::spawn(move || {
        let title = rt_clone.block_on(chat::generate_title(config.as_ref(), &message));
        let _ = tx.send(title);
    });
    rx
}

/// Answer paperwork questions from the local store instead of the API.
fn local_admin_reply(query: &str, store: Option<&admin::Store>) -> Option<ChatReply> {
    let store = store?;
    let documents = store.documents();
    if !admin::is_admin_query(query, &documents) {
        return None;
    }
    let doc = admin::find_best_match(query, &documents)?;
    let formatted = admin::answer(doc);
    Some(ChatReply {
        raw: formatted.chunks.join("\n\n"),
        formatted,
    })
}

/// Persist the transcript if it changed since the last save.
fn save_conversation_if_dirty(app: &App) {
    if !app.dirty {
        return;
    }
    let turns = app.stored_turns();
    if turns.is_empty() {
        return;
    }
    let title = match (&app.title, app.first_user_message()) {
        (Some(t), _) => t.clone(),
        (None, Some(first)) => chat::fallback_title(first),
        (None, None) => "Conversation".to_string(),
    };
    if let Some(history) = History::open_default() {
        if let Err(e) = history.save(&app.conversation_id, &title, &turns) {
            log::warn!("Could not save conversation: {}", e);
        }
    }
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for async chat calls.
pub fn run(config: Arc<Config>) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );

    let store = admin::Store::open_default();
    if let Some(s) = &store {
        if let Err(e) = s.initialize() {
            log::warn!("Could not seed the admin store: {}", e);
        }
    }

    let mut app = App::new(
        config.model_id.clone(),
        Duration::from_millis(config.reveal_delay_ms),
    );
    let mut pending_chat: Option<PendingChat> = None;
    let mut pending_title: Option<mpsc::Receiver<String>> = None;

    loop {
        if let Some(chat_handle) = &pending_chat {
            if let Ok(result) = chat_handle.result_rx.try_recv() {
                app.set_thinking(false);
                match result {
                    Ok(reply) => {
                        if app.title.is_none() && pending_title.is_none() {
                            if let Some(first) = app.first_user_message() {
                                pending_title = Some(spawn_title_fetch(
                                    &rt,
                                    Arc::clone(&config),
                                    first.to_string(),
                                ));
                            }
                        }
                        app.push_reply(reply, Instant::now());
                    }
                    Err(ChatError::Cancelled) => app.push_notice("[annulé]"),
                    Err(e) => {
                        log::warn!("Chat request failed: {}", e);
                        app.push_reply(chat::fallback_reply(), Instant::now());
                    }
                }
                pending_chat = None;
            }
        }

        if let Some(rx) = &pending_title {
            if let Ok(title) = rx.try_recv() {
                app.title = Some(title);
                pending_title = None;
            }
        }

        app.tick_reveal(Instant::now());
        if app.is_thinking() {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
        }

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if !event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
            (KeyCode::Esc, _) => {
                if let Some(chat_handle) = &pending_chat {
                    chat_handle.cancel_token.cancel();
                } else {
                    break;
                }
            }
            (KeyCode::Enter, _) => {
                submit(&mut app, &mut pending_chat, &rt, &config, store.as_ref());
            }
            (KeyCode::Char(c), KeyModifiers::ALT) if c.is_ascii_digit() => {
                let index = (c as usize).saturating_sub('1' as usize);
                if let Some(suggestion) = app.current_suggestions().get(index) {
                    app.input = suggestion.clone();
                    submit(&mut app, &mut pending_chat, &rt, &config, store.as_ref());
                }
            }
            (KeyCode::Backspace, _) => {
                app.input.pop();
            }
            (KeyCode::Up, _) => app.scroll = app.scroll.saturating_add(1),
            (KeyCode::Down, _) => app.scroll = app.scroll.saturating_sub(1),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                app.input.push(c);
            }
            _ => {}
        }
    }

    save_conversation_if_dirty(&app);
    terminal.show_cursor()?;
    Ok(())
}

/// Send the input line: locally for paperwork matches, otherwise to the API.
fn submit(
    app: &mut App,
    pending_chat: &mut Option<PendingChat>,
    rt: &Arc<Runtime>,
    config: &Arc<Config>,
    store: Option<&admin::Store>,
) {
    if pending_chat.is_some() {
        return;
    }
    let message = app.input.trim().to_string();
    if message.is_empty() {
        return;
    }
    app.input.clear();
    app.scroll = 0;

    let history = app.api_turns();
    app.push_user(&message);

    if let Some(reply) = local_admin_reply(&message, store) {
        app.push_reply(reply, Instant::now());
        return;
    }

    app.set_thinking(true);
    *pending_chat = Some(spawn_chat(rt, Arc::clone(config), message, history));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::admin::Store;

    #[test]
    fn paperwork_question_is_answered_locally() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("admin"));
        store.initialize().unwrap();

        let reply = local_admin_reply("how to get a passport", Some(&store)).unwrap();
        assert!(reply.raw.contains("New Passport Application"));
        assert!(reply.formatted.has_formatting);
    }

    #[test]
    fn chitchat_goes_to_the_api() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("admin"));
        store.initialize().unwrap();

        assert!(local_admin_reply("wach rak khoya", Some(&store)).is_none());
        assert!(local_admin_reply("wach rak khoya", None).is_none());
    }
}
