//! Interactive loop driving the session command handlers.
//!
//! Each stdin line becomes one command; the handler runs to completion and
//! the full chat log is re-rendered before the next prompt. Failures become
//! inline notices and never end the loop.

use crate::models::Config;
use crate::render;
use crate::session::{ImageOutcome, Session};
use crate::{Error, Result};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// One parsed line of user input.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Question(&'a str),
    ToggleImagePanel,
    ImagePrompt(&'a str),
    Quit,
}

pub fn parse_command(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    if trimmed == "/sair" {
        Command::Quit
    } else if trimmed == "/imagem" {
        Command::ToggleImagePanel
    } else if let Some(rest) = trimmed.strip_prefix("/visao") {
        if rest.is_empty() || rest.starts_with(' ') {
            Command::ImagePrompt(rest.trim())
        } else {
            Command::Question(trimmed)
        }
    } else {
        Command::Question(trimmed)
    }
}

pub struct App {
    session: Session,
}

impl App {
    /// Build the app from environment configuration, printing a usage
    /// notice for each missing credential instead of failing.
    pub fn new(out: &mut impl Write) -> Result<Self> {
        let config = Config::from_env();

        if config.gemini_api_key.is_none() {
            writeln!(out, "{}", Error::MissingGeminiKey)?;
        }
        if config.stability_api_key.is_none() {
            writeln!(out, "{}", Error::MissingStabilityKey)?;
        }

        Ok(Self {
            session: Session::new(&config)?,
        })
    }

    pub fn with_session(session: Session) -> Self {
        Self { session }
    }

    /// Handle one input line. Returns `false` when the loop should exit.
    pub async fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<bool> {
        match parse_command(line) {
            Command::Quit => return Ok(false),
            Command::ToggleImagePanel => {
                self.session.toggle_image_panel();
                render::render_chat(self.session.state(), out)?;
            }
            Command::Question(text) => {
                match self.session.submit_question(text).await {
                    Ok(()) => render::render_chat(self.session.state(), out)?,
                    Err(e) => self.write_notice(&e, out)?,
                }
            }
            Command::ImagePrompt(text) => {
                match self.session.submit_image_prompt(text).await {
                    Ok(ImageOutcome::Rendered(rendered)) => {
                        render::render_chat(self.session.state(), out)?;
                        render::render_image_notice(&rendered, out)?;
                    }
                    Ok(ImageOutcome::PanelHidden) => {
                        writeln!(
                            out,
                            "O painel de imagem está oculto. Use /imagem para ativá-lo."
                        )?;
                    }
                    Err(e) => self.write_notice(&e, out)?,
                }
            }
        }
        Ok(true)
    }

    fn write_notice(&self, error: &Error, out: &mut impl Write) -> Result<()> {
        if error.is_precondition() {
            writeln!(out, "{}", error)?;
        } else {
            writeln!(out, "Erro ao gerar imagem: {}", error)?;
        }
        Ok(())
    }

    /// Read stdin line by line until `/sair` or EOF.
    pub async fn run(&mut self) -> Result<()> {
        let mut stdout = std::io::stdout();
        render::render_chat(self.session.state(), &mut stdout)?;
        writeln!(
            stdout,
            "Digite uma pergunta, /imagem, /visao <texto> ou /sair."
        )?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if !self.handle_line(&line, &mut stdout).await? {
                break;
            }
        }

        info!("Session ended");
        Ok(())
    }
}
