//! Interactive session shell. The shell process owns the one `AuthStore`, so
//! the session lives exactly as long as the shell does: the restore probe runs
//! when it starts and the cookie jar is dropped when it exits.

use crate::api::ApiConfig;
use crate::forms::{LoginForm, LogoutForm, RegistrationForm, SEMESTERS};
use crate::session::{AuthState, AuthStore, SessionClient, SessionHandle};
use anyhow::Result;
use secrecy::SecretString;
use std::io::{IsTerminal, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::info;

const HELP: &str = "\
commands:
  login [email]              sign in (prompts for the password)
  register                   create an account (prompts for each field)
  whoami                     show the current session
  logout                     sign out
  help                       show this help
  quit | exit                leave the shell";

#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    Empty,
    Help,
    Quit,
    WhoAmI,
    Logout,
    Register,
    Login { email: Option<String> },
}

/// How the shell reads passwords.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordInput {
    /// Hidden prompt on the controlling terminal.
    Terminal,
    /// Next line of the shell's own input, for piped or scripted sessions.
    Lines,
}

impl PasswordInput {
    /// Hidden prompts when stdin is a terminal, plain lines otherwise.
    #[must_use]
    pub fn detect() -> Self {
        if std::io::stdin().is_terminal() {
            Self::Terminal
        } else {
            Self::Lines
        }
    }
}

fn parse(line: &str) -> Result<ShellCommand, String> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(ShellCommand::Empty);
    };
    let rest: Vec<&str> = words.collect();

    match (name, rest.as_slice()) {
        ("help" | "?", []) => Ok(ShellCommand::Help),
        ("quit" | "exit", []) => Ok(ShellCommand::Quit),
        ("whoami", []) => Ok(ShellCommand::WhoAmI),
        ("logout", []) => Ok(ShellCommand::Logout),
        ("register", []) => Ok(ShellCommand::Register),
        ("login", []) => Ok(ShellCommand::Login { email: None }),
        ("login", [email]) => Ok(ShellCommand::Login {
            email: Some((*email).to_string()),
        }),
        ("login", _) => Err(
            "usage: login [email] (the password is prompted for, never passed inline)".to_string(),
        ),
        ("help" | "?" | "quit" | "exit" | "whoami" | "logout" | "register", _) => {
            Err(format!("{name} takes no arguments"))
        }
        _ => Err(format!("unknown command: {name} (try `help`)")),
    }
}

fn describe(state: &AuthState) -> String {
    match state {
        AuthState::Restoring => "Restoring session...".to_string(),
        AuthState::Anonymous => "Not signed in.".to_string(),
        AuthState::Authenticated(user) => {
            let admin = if state.is_admin() { " (admin)" } else { "" };
            format!("Signed in as {} <{}>{admin}", user.name, user.email)
        }
    }
}

/// Handle the shell action against stdin/stdout.
///
/// # Errors
/// Returns an error if the backend URL is invalid or stdin/stdout fail.
pub async fn handle(backend_url: &str) -> Result<()> {
    let config = ApiConfig::new(backend_url)?;
    info!(backend = %config.base_url, "starting session shell");

    let session = SessionHandle::new();
    let mut store = AuthStore::new(SessionClient::connect(config, &session)?);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run(&mut store, stdin, &mut stdout, PasswordInput::detect()).await
}

/// Runs the read-eval loop until `quit` or end of input.
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub async fn run<R, W>(
    store: &mut AuthStore,
    input: R,
    out: &mut W,
    passwords: PasswordInput,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    writeln!(out, "{}", describe(&store.state()))?;
    let state = store.ready().await;
    writeln!(out, "{}", describe(&state))?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse(&line) {
            Ok(ShellCommand::Empty) => {}
            Ok(ShellCommand::Quit) => break,
            Ok(ShellCommand::Help) => writeln!(out, "{HELP}")?,
            Ok(ShellCommand::WhoAmI) => writeln!(out, "{}", describe(&store.state()))?,
            Ok(ShellCommand::Login { email }) => {
                let email = match email {
                    Some(email) => email,
                    None => match prompt_line(&mut lines, out, "Email").await? {
                        Some(email) => email,
                        None => break,
                    },
                };
                let Some(password) = prompt_secret(&mut lines, out, "Password", passwords).await?
                else {
                    break;
                };
                let notice = LoginForm { email, password }.submit(store).await;
                writeln!(out, "{notice}")?;
            }
            Ok(ShellCommand::Register) => {
                let Some(form) = prompt_registration(&mut lines, out, passwords).await? else {
                    break;
                };
                let notice = form.submit(store).await;
                writeln!(out, "{notice}")?;
            }
            Ok(ShellCommand::Logout) => {
                let notice = LogoutForm.submit(store).await;
                writeln!(out, "{notice}")?;
            }
            Err(message) => writeln!(out, "{message}")?,
        }
    }

    Ok(())
}

async fn prompt_line<R, W>(lines: &mut Lines<R>, out: &mut W, prompt: &str) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{prompt}: ")?;
    out.flush()?;
    Ok(lines.next_line().await?)
}

/// Reads a password without echoing it when attached to a terminal. Returns
/// `None` if input ends first.
async fn prompt_secret<R, W>(
    lines: &mut Lines<R>,
    out: &mut W,
    prompt: &str,
    passwords: PasswordInput,
) -> Result<Option<SecretString>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    match passwords {
        PasswordInput::Lines => Ok(prompt_line(lines, out, prompt)
            .await?
            .map(SecretString::from)),
        PasswordInput::Terminal => {
            let prompt = prompt.to_string();
            let password = tokio::task::spawn_blocking(move || {
                dialoguer::Password::new()
                    .with_prompt(prompt)
                    .allow_empty_password(true)
                    .interact()
            })
            .await??;
            Ok(Some(SecretString::from(password)))
        }
    }
}

/// Asks for each registration field in turn. Returns `None` if input ends
/// before the form is complete.
async fn prompt_registration<R, W>(
    lines: &mut Lines<R>,
    out: &mut W,
    passwords: PasswordInput,
) -> Result<Option<RegistrationForm>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let semester_prompt = format!("Semester ({})", SEMESTERS.join("/"));
    let prompts = [
        "Full name",
        "Email",
        "USN (e.g. 1AB21CS001)",
        "Course",
        semester_prompt.as_str(),
    ];

    let mut answers = Vec::with_capacity(prompts.len());
    for prompt in prompts {
        match prompt_line(lines, out, prompt).await? {
            Some(answer) => answers.push(answer),
            None => return Ok(None),
        }
    }
    let Some(password) = prompt_secret(lines, out, "Password", passwords).await? else {
        return Ok(None);
    };
    let Some(confirm_password) = prompt_secret(lines, out, "Confirm password", passwords).await?
    else {
        return Ok(None);
    };

    let mut answers = answers.into_iter();
    let mut next = || answers.next().unwrap_or_default();
    Ok(Some(RegistrationForm {
        name: next(),
        email: next(),
        usn: next(),
        course: next(),
        semester: next(),
        password,
        confirm_password,
    }))
}
