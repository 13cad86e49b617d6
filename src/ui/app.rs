//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui_loop;
use crate::events::Event;
use crate::logging::LogLevel;
use crate::router::{Route, Router};
use crate::theme::{Theme, ThemeContext};
use crate::ui::dashboard::{DashboardAction, DashboardState, render_dashboard};
use crate::ui::login::{LoginAction, LoginState, render_login};
use crossterm::event::{
    Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use futures::StreamExt;
use ratatui::{Frame, Terminal, backend::Backend};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub theme: Theme,
    /// Path the router starts at.
    pub initial_route: String,
    pub log_threshold: LogLevel,
}

impl UIConfig {
    pub fn new(
        with_background_color: bool,
        theme: Theme,
        initial_route: impl Into<String>,
        log_threshold: LogLevel,
    ) -> Self {
        Self {
            with_background_color,
            theme,
            initial_route: initial_route.into(),
            log_threshold,
        }
    }
}

/// Whether the UI loop keeps going after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// Shared theme handle; every screen reads its palette from here.
    theme: ThemeContext,

    router: Router,

    /// Set by a login or register submit. Never checked by the router.
    logged_in: bool,

    login: LoginState,

    /// Outlive route changes, so each log keeps its entries for the session.
    dashboard: DashboardState,

    /// Whether to paint the theme background
    with_background_color: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(ui_config: UIConfig) -> Self {
        let mut router = Router::default();
        router.navigate(&ui_config.initial_route);
        Self {
            theme: ThemeContext::new(ui_config.theme),
            router,
            logged_in: false,
            login: LoginState::default(),
            dashboard: DashboardState::new(ui_config.log_threshold),
            with_background_color: ui_config.with_background_color,
        }
    }

    /// Accepts the login or register form and enters the dashboard.
    pub fn login(&mut self) {
        self.logged_in = true;
        let msg = format!("Signed in via {:?} form", self.login.mode());
        self.dashboard.add_to_activity_log(Event::session(msg));
        self.navigate(Route::Dashboard(None));
    }

    fn navigate(&mut self, route: Route) {
        let route = self.router.go(route);
        self.dashboard
            .add_to_activity_log(Event::navigated(format!("Navigated to {route}")));
    }

    fn toggle_theme(&mut self) {
        let theme = self.theme.toggle();
        self.dashboard
            .add_to_activity_log(Event::theme(format!("Theme switched to {theme}")));
    }

    /// Applies one key press to whatever screen the router shows.
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        // Skip events that are not KeyEventKind::Press
        if key.kind == KeyEventKind::Release {
            return Control::Continue;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Control::Quit,
                KeyCode::Char('t') => {
                    self.toggle_theme();
                    return Control::Continue;
                }
                _ => {}
            }
        }

        match self.router.current() {
            Route::Login => match self.login.handle_key(key) {
                LoginAction::Submit => self.login(),
                LoginAction::Quit => return Control::Quit,
                LoginAction::None => {}
            },
            Route::Dashboard(view) => match self.dashboard.handle_key(view, key) {
                DashboardAction::Navigate(target) => {
                    self.navigate(Route::Dashboard(Some(target)))
                }
                DashboardAction::ToggleTheme => self.toggle_theme(),
                DashboardAction::Quit => return Control::Quit,
                DashboardAction::None => {}
            },
        }
        Control::Continue
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(ui_loop::tick());

    loop {
        terminal.draw(|f| render(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {}
            maybe_event = events.next() => match maybe_event {
                Some(Ok(TermEvent::Key(key))) => {
                    if app.handle_key(key) == Control::Quit {
                        log::info!("Exiting on user request");
                        return Ok(());
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => return Ok(()),
            },
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.router.current() {
        Route::Login => render_login(
            f,
            &app.login,
            &app.theme.palette(),
            app.with_background_color,
        ),
        Route::Dashboard(view) => render_dashboard(
            f,
            &app.dashboard,
            view,
            app.theme.theme(),
            app.with_background_color,
        ),
    }
}
