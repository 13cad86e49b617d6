//! Login screen module
//!
//! Sign-in and register forms. Submitting either form is accepted as is;
//! the app marks the session as logged in and routes to the dashboard.

use crate::keys::generate_secret_key;
use crate::theme::Palette;
use crate::ui::dashboard::utils::{centered_rect, mask};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginMode {
    #[default]
    SignIn,
    Register,
}

impl LoginMode {
    pub fn heading(self) -> &'static str {
        match self {
            LoginMode::SignIn => "Welcome Back",
            LoginMode::Register => "Create an Account",
        }
    }

    /// Label of the link that switches to the other form.
    pub fn toggle_hint(self) -> &'static str {
        match self {
            LoginMode::SignIn => "Need an account? Register",
            LoginMode::Register => "Already have an account? Sign In",
        }
    }

    /// Inputs shown by this form, in focus order.
    pub fn fields(self) -> &'static [LoginField] {
        match self {
            LoginMode::SignIn => &[LoginField::Email, LoginField::Password],
            LoginMode::Register => &[
                LoginField::Name,
                LoginField::Username,
                LoginField::Email,
                LoginField::Password,
                LoginField::SecretKey,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Name,
    Username,
    Email,
    Password,
    SecretKey,
}

impl LoginField {
    pub fn label(self) -> &'static str {
        match self {
            LoginField::Name => "Name",
            LoginField::Username => "Username",
            LoginField::Email => "Email",
            LoginField::Password => "Password",
            LoginField::SecretKey => "Secret Key",
        }
    }
}

/// What the app has to do after the login screen handled a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    None,
    Submit,
    Quit,
}

#[derive(Debug, Default)]
pub struct LoginState {
    mode: LoginMode,
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub secret_key: String,
    /// Index into the current mode's fields.
    focus: usize,
}

impl LoginState {
    pub fn mode(&self) -> LoginMode {
        self.mode
    }

    /// Switches between sign-in and register. Typed values are kept.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            LoginMode::SignIn => LoginMode::Register,
            LoginMode::Register => LoginMode::SignIn,
        };
        self.focus = 0;
        log::debug!("Login form switched to {:?}", self.mode);
    }

    pub fn focused_field(&self) -> LoginField {
        self.mode.fields()[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.mode.fields().len();
    }

    pub fn focus_prev(&mut self) {
        let len = self.mode.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    pub fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Name => &self.name,
            LoginField::Username => &self.username,
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
            LoginField::SecretKey => &self.secret_key,
        }
    }

    fn value_mut(&mut self, field: LoginField) -> &mut String {
        match field {
            LoginField::Name => &mut self.name,
            LoginField::Username => &mut self.username,
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
            LoginField::SecretKey => &mut self.secret_key,
        }
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.focused_field();
        self.value_mut(field).push(c);
    }

    pub fn pop_char(&mut self) {
        let field = self.focused_field();
        self.value_mut(field).pop();
    }

    /// Fills the secret key input with a fresh random key.
    pub fn generate_secret_key(&mut self) {
        self.secret_key = generate_secret_key();
        log::debug!("Generated a new secret key");
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return LoginAction::Quit,
            KeyCode::Enter => return LoginAction::Submit,
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::Backspace => self.pop_char(),
            KeyCode::Char('r') if ctrl => self.toggle_mode(),
            KeyCode::Char('g') if ctrl => {
                if self.mode == LoginMode::Register {
                    self.generate_secret_key();
                }
            }
            KeyCode::Char(c) if !ctrl => self.push_char(c),
            _ => {}
        }
        LoginAction::None
    }
}

/// Renders the login card centered on the screen.
pub fn render_login(
    f: &mut Frame,
    state: &LoginState,
    palette: &Palette,
    with_background_color: bool,
) {
    if with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(palette.background)),
            f.area(),
        );
    }

    let fields = state.mode.fields();
    let card = centered_rect(50, 90, f.area());
    let wanted = fields.len() as u16 * 3 + 10;
    let card = ratatui::layout::Rect {
        height: card.height.min(wanted),
        ..card
    };
    f.render_widget(Clear, card);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.muted))
            .style(Style::default().bg(palette.surface).fg(palette.text)),
        card,
    );

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(fields.iter().map(|_| Constraint::Length(3)));
    constraints.extend([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ]);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(card.inner(Margin::new(3, 1)));

    let heading = Paragraph::new(state.mode.heading())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(heading, chunks[0]);

    for (index, field) in fields.iter().enumerate() {
        let focused = index == state.focus;
        let raw = state.value(*field);
        let mut value = if *field == LoginField::Password {
            mask(raw)
        } else {
            raw.to_string()
        };
        if focused {
            value.push('▏');
        }
        let title = if *field == LoginField::SecretKey {
            format!("{} [Ctrl+G] Generate", field.label())
        } else {
            field.label().to_string()
        };
        let border = if focused {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.muted)
        };
        let input = Paragraph::new(value).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
        f.render_widget(input, chunks[index + 1]);
    }

    let after = fields.len() + 1;
    let submit = match state.mode {
        LoginMode::SignIn => "[Enter] Sign In",
        LoginMode::Register => "[Enter] Register",
    };
    f.render_widget(
        Paragraph::new(submit).alignment(Alignment::Center).style(
            Style::default()
                .fg(palette.surface)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        chunks[after],
    );

    let link = Style::default().fg(palette.accent);
    f.render_widget(
        Paragraph::new(format!("[Ctrl+R] {}", state.mode.toggle_hint())).style(link),
        chunks[after + 1],
    );
    if state.mode == LoginMode::SignIn {
        f.render_widget(
            Paragraph::new("Forgot your password?")
                .alignment(Alignment::Center)
                .style(link),
            chunks[after + 2],
        );
    }
    f.render_widget(
        Paragraph::new("[Tab] Next field | [Ctrl+T] Theme | [Esc] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.muted)),
        chunks[after + 3],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn sign_in_shows_email_and_password() {
        let state = LoginState::default();
        assert_eq!(state.mode(), LoginMode::SignIn);
        assert_eq!(
            state.mode().fields(),
            &[LoginField::Email, LoginField::Password]
        );
        assert_eq!(state.mode().heading(), "Welcome Back");
    }

    #[test]
    fn toggle_switches_form_and_keeps_values() {
        let mut state = LoginState::default();
        state.handle_key(key(KeyCode::Char('a')));
        state.handle_key(ctrl('r'));
        assert_eq!(state.mode(), LoginMode::Register);
        assert_eq!(state.mode().heading(), "Create an Account");
        assert_eq!(state.mode().toggle_hint(), "Already have an account? Sign In");
        assert_eq!(state.mode().fields().len(), 5);
        assert_eq!(state.focused_field(), LoginField::Name);
        assert_eq!(state.email, "a");
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut state = LoginState::default();
        for c in "me@x.io".chars() {
            state.handle_key(key(KeyCode::Char(c)));
        }
        state.handle_key(key(KeyCode::Tab));
        state.handle_key(key(KeyCode::Char('p')));
        state.handle_key(key(KeyCode::Char('w')));
        state.handle_key(key(KeyCode::Backspace));
        assert_eq!(state.email, "me@x.io");
        assert_eq!(state.password, "p");

        state.handle_key(key(KeyCode::Tab));
        assert_eq!(state.focused_field(), LoginField::Email);
        state.handle_key(key(KeyCode::BackTab));
        assert_eq!(state.focused_field(), LoginField::Password);
    }

    #[test]
    fn generate_key_only_in_register_mode() {
        let mut state = LoginState::default();
        state.handle_key(ctrl('g'));
        assert!(state.secret_key.is_empty());

        state.toggle_mode();
        state.handle_key(ctrl('g'));
        assert!(!state.secret_key.is_empty());
        assert!(state.secret_key.len() <= 26);
        assert!(
            state
                .secret_key
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }

    #[test]
    fn enter_submits_whatever_is_typed() {
        let mut empty = LoginState::default();
        assert_eq!(empty.handle_key(key(KeyCode::Enter)), LoginAction::Submit);

        let mut register = LoginState::default();
        register.toggle_mode();
        register.handle_key(key(KeyCode::Char('?')));
        assert_eq!(register.handle_key(key(KeyCode::Enter)), LoginAction::Submit);
        assert_eq!(register.handle_key(key(KeyCode::Esc)), LoginAction::Quit);
    }
}
