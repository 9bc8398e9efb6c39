// src/tui/app.rs — Chat screen state, event loop, and rendering.
//
// All state transitions live on `ChatApp`, which is plain data: key events
// and completed API calls go in, optional `Action`s asking the event loop
// to issue a request come out. The loop itself only draws, polls, and
// spawns network calls on the tokio runtime.

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::client::types::{AnalyticsSnapshot, ChatReply, ProblemReply};
use crate::client::LearningApi;
use crate::infra::config::{ChatConfig, Config};
use crate::infra::errors::TutorError;
use crate::ui::analytics::{learning_mode_label, AnalyticsView};
use crate::ui::transcript::{ReplyMeta, Transcript, PROBLEM_FALLBACK_TEXT};

use super::theme::Theme;
use super::widgets;

/// How long a startup/overlay error banner stays on screen.
const BANNER_TTL: Duration = Duration::from_secs(5);

const HELP_TEXT: &str = "Commands:\n\
    /analytics          Show your learning analytics\n\
    /problem [topic]    Generate a practice problem\n\
    /clear              Clear the conversation\n\
    /id                 Show your user id\n\
    /quit               Leave the chat\n\
    \n\
    Enter sends, PgUp/PgDn scroll, Esc quits.";

// ── Events and actions ───────────────────────────────────────────

/// A completed API call, delivered to the UI loop over a channel.
pub enum ApiEvent {
    Reply(Result<ChatReply, TutorError>),
    Analytics(Result<AnalyticsSnapshot, TutorError>),
    Problem {
        topic: String,
        result: Result<ProblemReply, TutorError>,
    },
    Health(Result<serde_json::Value, TutorError>),
    InitialAnalytics(Result<AnalyticsSnapshot, TutorError>),
}

/// A request the state machine asks the event loop to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Send(String),
    FetchAnalytics,
    FetchInitialAnalytics,
    GenerateProblem {
        topic: String,
        problem_type: String,
        difficulty: String,
    },
}

struct Banner {
    text: String,
    expires_at: Instant,
}

/// Counters mirrored from chat replies and the initial analytics fetch.
#[derive(Debug, Default)]
pub struct Status {
    pub interactions: u64,
    pub problems_solved: u64,
    pub average_score: f64,
    pub current_topic: Option<String>,
    pub learning_mode: Option<String>,
}

// ── App state ────────────────────────────────────────────────────

pub struct ChatApp {
    pub transcript: Transcript,
    pub status: Status,
    user_id: String,
    chat_cfg: ChatConfig,

    input: String,
    /// Explicit single-flight guard: while true, every send path is a
    /// no-op, including the Enter key.
    in_flight: bool,
    overlay: Option<AnalyticsView>,
    confirm_clear: bool,
    banner: Option<Banner>,
    scroll: u16,
    should_quit: bool,
}

impl ChatApp {
    pub fn new(user_id: String, chat_cfg: ChatConfig, cached_interactions: Option<u64>) -> Self {
        Self {
            transcript: Transcript::new(),
            status: Status {
                interactions: cached_interactions.unwrap_or(0),
                ..Status::default()
            },
            user_id,
            chat_cfg,
            input: String::new(),
            in_flight: false,
            overlay: None,
            confirm_clear: false,
            banner: None,
            scroll: 0,
            should_quit: false,
        }
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn overlay(&self) -> Option<&AnalyticsView> {
        self.overlay.as_ref()
    }

    pub fn banner_text(&self) -> Option<&str> {
        self.banner.as_ref().map(|b| b.text.as_str())
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Expire the transient banner.
    pub fn tick(&mut self, now: Instant) {
        if let Some(banner) = &self.banner {
            if now >= banner.expires_at {
                self.banner = None;
            }
        }
    }

    pub fn show_banner(&mut self, text: impl Into<String>, now: Instant) {
        self.banner = Some(Banner {
            text: text.into(),
            expires_at: now + BANNER_TTL,
        });
    }

    /// Handle a key event. Modal states (clear confirmation, analytics
    /// overlay) take precedence over the input line.
    pub fn on_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.confirm_clear {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    self.transcript.clear();
                    self.confirm_clear = false;
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.confirm_clear = false;
                }
                _ => {}
            }
            return None;
        }

        if self.overlay.is_some() {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')
            ) {
                self.overlay = None;
            }
            return None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                None
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_add(5);
                None
            }
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_sub(5);
                None
            }
            KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            _ => None,
        }
    }

    /// The single entry point for sending, shared by every path that can
    /// trigger a send. Empty input is a no-op; a send while one is already
    /// in flight is a no-op that keeps the typed text.
    pub fn submit(&mut self) -> Option<Action> {
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            self.input.clear();
            return None;
        }

        if trimmed.starts_with('/') {
            let command = trimmed.to_string();
            self.input.clear();
            return self.slash_command(&command);
        }

        if self.in_flight {
            return None;
        }

        let text = trimmed.to_string();
        self.input.clear();
        self.transcript.push_user(&text);
        self.in_flight = true;
        self.scroll = 0;
        Some(Action::Send(text))
    }

    fn slash_command(&mut self, command: &str) -> Option<Action> {
        let mut parts = command.splitn(2, ' ');
        let cmd = parts.next().unwrap_or("");
        let arg = parts.next().map(str::trim).unwrap_or("");

        match cmd {
            "/help" => {
                self.transcript.push_assistant(HELP_TEXT, None);
                None
            }
            "/id" => {
                self.transcript
                    .push_assistant(format!("Your user id: {}", self.user_id), None);
                None
            }
            "/clear" => {
                self.confirm_clear = true;
                None
            }
            "/quit" | "/exit" => {
                self.should_quit = true;
                None
            }
            "/analytics" => Some(Action::FetchAnalytics),
            "/problem" => {
                if self.in_flight {
                    // Same no-op contract as a guarded plain send: the
                    // typed text stays in the input line.
                    self.input = command.to_string();
                    return None;
                }
                let topic = if !arg.is_empty() {
                    arg.to_string()
                } else {
                    self.status
                        .current_topic
                        .clone()
                        .unwrap_or_else(|| self.chat_cfg.default_topic.clone())
                };
                self.transcript
                    .push_user(format!("Generate a practice problem about {topic}"));
                self.in_flight = true;
                self.scroll = 0;
                Some(Action::GenerateProblem {
                    topic,
                    problem_type: self.chat_cfg.problem_type.clone(),
                    difficulty: self.chat_cfg.difficulty.clone(),
                })
            }
            _ => {
                self.transcript.push_assistant(
                    format!("Unknown command: {cmd}. Type /help for commands."),
                    None,
                );
                None
            }
        }
    }

    /// Apply a completed API call. May request a follow-up action (the
    /// startup health check chains into the initial analytics fetch).
    pub fn apply(&mut self, event: ApiEvent, now: Instant) -> Option<Action> {
        match event {
            ApiEvent::Reply(Ok(reply)) => {
                self.in_flight = false;
                self.scroll = 0;
                self.status.problems_solved = reply.problems_solved;
                self.status.average_score = reply.average_score;
                self.status.interactions += 1;
                if reply.current_topic.is_some() {
                    self.status.current_topic = reply.current_topic.clone();
                }
                self.status.learning_mode = Some(reply.learning_mode.clone());
                self.transcript.push_assistant(
                    reply.response,
                    Some(ReplyMeta {
                        learning_mode: reply.learning_mode,
                        current_topic: reply.current_topic,
                    }),
                );
                None
            }
            ApiEvent::Reply(Err(e)) => {
                tracing::warn!(error = %e, "chat send failed");
                self.in_flight = false;
                self.scroll = 0;
                self.transcript.push_fallback();
                None
            }
            ApiEvent::Analytics(Ok(snapshot)) => {
                self.overlay = Some(AnalyticsView::from_snapshot(&snapshot));
                None
            }
            ApiEvent::Analytics(Err(e)) => {
                tracing::warn!(error = %e, "analytics fetch failed");
                self.show_banner("Could not load analytics. Please try again later.", now);
                None
            }
            ApiEvent::Problem { topic, result } => {
                self.in_flight = false;
                self.scroll = 0;
                match result {
                    Ok(reply) => {
                        self.transcript.push_assistant(
                            problem_message(&reply),
                            Some(ReplyMeta {
                                learning_mode: "problem_solving".into(),
                                current_topic: Some(topic),
                            }),
                        );
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "problem generation failed");
                        self.transcript.push_assistant(PROBLEM_FALLBACK_TEXT, None);
                    }
                }
                None
            }
            ApiEvent::Health(Ok(_)) => Some(Action::FetchInitialAnalytics),
            ApiEvent::Health(Err(e)) => {
                tracing::warn!(error = %e, "health check failed");
                self.show_banner(e.to_string(), now);
                None
            }
            ApiEvent::InitialAnalytics(Ok(snapshot)) => {
                self.status.interactions = snapshot.total_interactions;
                self.status.problems_solved = snapshot.problems_solved;
                self.status.average_score = snapshot.average_score;
                None
            }
            ApiEvent::InitialAnalytics(Err(e)) => {
                tracing::debug!(error = %e, "initial analytics unavailable");
                None
            }
        }
    }
}

/// Flatten a generated problem into a chat message.
fn problem_message(reply: &ProblemReply) -> String {
    let mut text = reply.problem.problem_statement.clone();
    if !reply.problem.hints.is_empty() {
        text.push_str("\n\nHints:");
        for hint in &reply.problem.hints {
            text.push_str("\n- ");
            text.push_str(hint);
        }
    }
    text
}

// ── Public entry point ───────────────────────────────────────────

/// Launch the chat screen. Blocks until the user quits (Esc / Ctrl-C /
/// `/quit`). Must run inside a tokio runtime: network calls are spawned
/// on it and their completions polled each tick.
pub fn run_chat(api: Arc<dyn LearningApi>, config: &Config) -> anyhow::Result<()> {
    let mut app = ChatApp::new(
        api.user_id(),
        config.chat.clone(),
        api.cached_interactions(),
    );

    let (tx, rx) = mpsc::unbounded_channel();
    let handle = tokio::runtime::Handle::current();

    // Startup liveness probe; its completion chains the initial analytics
    // fetch through ChatApp::apply.
    {
        let api = api.clone();
        let tx = tx.clone();
        handle.spawn(async move {
            let _ = tx.send(ApiEvent::Health(api.health_check().await));
        });
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app, &api, &handle, tx, rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut ChatApp,
    api: &Arc<dyn LearningApi>,
    handle: &tokio::runtime::Handle,
    tx: mpsc::UnboundedSender<ApiEvent>,
    mut rx: mpsc::UnboundedReceiver<ApiEvent>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        app.tick(Instant::now());

        // Drain completed API calls.
        while let Ok(event) = rx.try_recv() {
            if let ApiEvent::InitialAnalytics(Ok(snapshot)) = &event {
                api.cache_interactions(snapshot.total_interactions);
            }
            if let Some(action) = app.apply(event, Instant::now()) {
                dispatch(action, api, handle, &tx);
            }
        }

        if app.should_quit() {
            return Ok(());
        }

        // Poll for key events (250ms timeout keeps the banner and the
        // completion channel responsive).
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = app.on_key(key) {
                    dispatch(action, api, handle, &tx);
                }
            }
        }
    }
}

fn dispatch(
    action: Action,
    api: &Arc<dyn LearningApi>,
    handle: &tokio::runtime::Handle,
    tx: &mpsc::UnboundedSender<ApiEvent>,
) {
    let api = api.clone();
    let tx = tx.clone();
    match action {
        Action::Send(text) => {
            handle.spawn(async move {
                let _ = tx.send(ApiEvent::Reply(api.send_message(&text).await));
            });
        }
        Action::FetchAnalytics => {
            handle.spawn(async move {
                let _ = tx.send(ApiEvent::Analytics(api.get_analytics().await));
            });
        }
        Action::FetchInitialAnalytics => {
            handle.spawn(async move {
                let _ = tx.send(ApiEvent::InitialAnalytics(api.get_analytics().await));
            });
        }
        Action::GenerateProblem {
            topic,
            problem_type,
            difficulty,
        } => {
            handle.spawn(async move {
                let result = api
                    .generate_problem(&topic, &problem_type, &difficulty)
                    .await;
                let _ = tx.send(ApiEvent::Problem { topic, result });
            });
        }
    }
}

// ── Rendering ────────────────────────────────────────────────────

fn render(f: &mut Frame, app: &mut ChatApp) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header + status line
            Constraint::Min(5),    // Transcript
            Constraint::Length(3), // Input
            Constraint::Length(1), // Footer / key hints
        ])
        .split(size);

    render_header(f, chunks[0], app);
    widgets::transcript::render(f, chunks[1], &app.transcript, app.scroll, app.in_flight());
    render_input(f, chunks[2], app);
    render_footer(f, chunks[3]);

    if let Some(view) = app.overlay() {
        let area = centered_rect(70, 80, size);
        widgets::analytics::render(f, area, view);
    }

    if app.confirm_clear {
        render_confirm(f, size);
    }

    if let Some(text) = app.banner_text() {
        render_banner(f, size, text);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &ChatApp) {
    let status = &app.status;
    let mode = status
        .learning_mode
        .as_deref()
        .map(learning_mode_label)
        .unwrap_or("-");
    let topic = status.current_topic.as_deref().unwrap_or("-");

    let line = Line::from(vec![
        Span::styled(format!("id {}  ", short_id(&app.user_id)), Theme::text_dim()),
        Span::styled("interactions ", Theme::text_dim()),
        Span::styled(format!("{}  ", status.interactions), Theme::text()),
        Span::styled("solved ", Theme::text_dim()),
        Span::styled(format!("{}  ", status.problems_solved), Theme::text()),
        Span::styled("avg ", Theme::text_dim()),
        Span::styled(
            crate::ui::analytics::format_score(status.average_score),
            Theme::score(status.average_score),
        ),
        Span::styled(format!("  topic {topic}  "), Theme::text_dim()),
        Span::styled(format!("mode {mode}"), Theme::text_dim()),
    ]);

    let p = Paragraph::new(line).block(
        Block::default()
            .title(Span::styled(" Tutor ", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    );
    f.render_widget(p, area);
}

fn render_input(f: &mut Frame, area: Rect, app: &ChatApp) {
    let border = if app.in_flight() {
        Theme::border_busy()
    } else {
        Theme::border()
    };

    let p = Paragraph::new(Line::from(vec![
        Span::styled("> ", Theme::text_dim()),
        Span::styled(app.input().to_string(), Theme::text()),
        Span::styled("_", Theme::text_dim()),
    ]))
    .block(
        Block::default()
            .title(" Message ")
            .borders(Borders::ALL)
            .border_style(border),
    );
    f.render_widget(p, area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" Enter", Theme::key_hint()),
        Span::styled(" send  ", Theme::key_desc()),
        Span::styled("/help", Theme::key_hint()),
        Span::styled(" commands  ", Theme::key_desc()),
        Span::styled("PgUp/PgDn", Theme::key_hint()),
        Span::styled(" scroll  ", Theme::key_desc()),
        Span::styled("Esc", Theme::key_hint()),
        Span::styled(" quit", Theme::key_desc()),
    ]);
    f.render_widget(Paragraph::new(hints), area);
}

fn render_confirm(f: &mut Frame, size: Rect) {
    let area = centered_rect(44, 20, size);
    let area = Rect {
        height: area.height.min(5),
        ..area
    };
    f.render_widget(Clear, area);

    let p = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            " Clear the conversation history? [y/n] ",
            Theme::text(),
        )),
    ])
    .block(
        Block::default()
            .title(" Confirm ")
            .borders(Borders::ALL)
            .border_style(Theme::border_busy()),
    );
    f.render_widget(p, area);
}

fn render_banner(f: &mut Frame, size: Rect, text: &str) {
    let width = (text.len() as u16 + 4).min(size.width.saturating_sub(2)).max(20);
    let area = Rect {
        x: size.width.saturating_sub(width + 1),
        y: 1,
        width,
        height: 3,
    };
    f.render_widget(Clear, area);

    let p = Paragraph::new(Span::styled(text.to_string(), Theme::error())).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::error()),
    );
    f.render_widget(p, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn short_id(user_id: &str) -> &str {
    // "user_<uuid>" is long; the first chunk is enough to recognize.
    user_id.get(..13).unwrap_or(user_id)
}
