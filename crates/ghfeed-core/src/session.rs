//! Interactive paging session
//!
//! A `Session` owns everything the prompt loop needs between fetches: the
//! event source, the terminal streams, the username and the metadata of the
//! page on screen. Each call to `Session::step` handles one prompt.
//!
//! With pagination metadata the user picks page numbers; without it the only
//! choice is to repeat the request. `q` ends the session at either prompt.

use crate::client::{EventSource, PageMeta};
use crate::config::FeedConfig;
use crate::errors::FeedError;
use crate::events::print_events;
use std::io::{BufRead, Write};

pub const QUIT: &str = "q";
pub const USERNAME_PROMPT: &str = "Enter username: ";
pub const PAGE_PROMPT: &str = "Enter page number (or 'q' to quit): ";
pub const REPEAT_PROMPT: &str = "Press Enter to perform a new request or type 'q' to quit: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

pub struct Session<S, R, W> {
    source: S,
    input: R,
    output: W,
    username: String,
    per_page: u32,
    page: u32,
    page_meta: Option<PageMeta>,
}

impl<S: EventSource, R: BufRead, W: Write> Session<S, R, W> {
    /// Ask for a username (unless configured) and show the first page.
    ///
    /// Any failure here is fatal. Returns `Ok(None)` if input ends before a
    /// username is entered.
    pub async fn start(
        source: S,
        mut input: R,
        mut output: W,
        config: &FeedConfig,
    ) -> Result<Option<Self>, FeedError> {
        let username = match &config.username {
            Some(username) => username.trim().to_string(),
            None => loop {
                write!(output, "{}", USERNAME_PROMPT)?;
                output.flush()?;
                match read_token(&mut input)? {
                    None => return Ok(None),
                    Some(token) if token.is_empty() => continue,
                    Some(token) => break token,
                }
            },
        };
        log::info!("Starting session for {}", username);

        let first = source.fetch(&username, 1, config.per_page).await?;
        print_events(&first.events, &mut output)?;

        Ok(Some(Self {
            source,
            input,
            output,
            username,
            per_page: config.per_page,
            page: 1,
            page_meta: first.page_meta,
        }))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_meta(&self) -> Option<PageMeta> {
        self.page_meta
    }

    /// Handle one prompt and whatever fetch it triggers.
    pub async fn step(&mut self) -> Result<Step, FeedError> {
        match self.page_meta {
            Some(meta) => self.step_paginated(meta).await,
            None => self.step_unpaginated().await,
        }
    }

    async fn step_paginated(&mut self, meta: PageMeta) -> Result<Step, FeedError> {
        writeln!(self.output, "Page {} of {}", meta.current, meta.total)?;
        let Some(answer) = self.prompt(PAGE_PROMPT)? else {
            return Ok(Step::Quit);
        };
        if answer == QUIT {
            return Ok(Step::Quit);
        }

        let requested = match answer.parse::<i64>() {
            Ok(requested) => requested,
            Err(e) => {
                writeln!(self.output, "Invalid page number: {}", e)?;
                return Ok(Step::Continue);
            }
        };
        match u32::try_from(requested).ok().filter(|page| meta.contains(*page)) {
            Some(page) => self.show(page).await?,
            None => writeln!(self.output, "Invalid page number: {}", requested)?,
        }
        Ok(Step::Continue)
    }

    async fn step_unpaginated(&mut self) -> Result<Step, FeedError> {
        match self.prompt(REPEAT_PROMPT)? {
            Some(answer) if answer != QUIT => {
                self.show(self.page).await?;
                Ok(Step::Continue)
            }
            _ => Ok(Step::Quit),
        }
    }

    async fn show(&mut self, page: u32) -> Result<(), FeedError> {
        match self.source.fetch(&self.username, page, self.per_page).await {
            Ok(fetched) => {
                print_events(&fetched.events, &mut self.output)?;
                self.page = page;
                self.page_meta = fetched.page_meta;
                Ok(())
            }
            Err(e) if e.is_fatal() => {
                log::error!("Fetching page {} failed: {}", page, e);
                Err(e)
            }
            Err(e) => {
                log::warn!("Fetching page {} failed: {}", page, e);
                writeln!(self.output, "Error getting events: {}", e)?;
                Ok(())
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, FeedError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        read_token(&mut self.input)
    }
}

/// Run a whole session: start, then step until the user quits.
pub async fn run<S, R, W>(source: S, input: R, output: W, config: &FeedConfig) -> Result<(), FeedError>
where
    S: EventSource,
    R: BufRead,
    W: Write,
{
    let Some(mut session) = Session::start(source, input, output, config).await? else {
        log::info!("Input closed before a username was entered");
        return Ok(());
    };
    while session.step().await? == Step::Continue {}
    log::info!("Session for {} ended", session.username());
    Ok(())
}

/// First whitespace-delimited word of the next input line, or `None` at end of input.
/// A blank line yields an empty token.
fn read_token<R: BufRead>(input: &mut R) -> Result<Option<String>, FeedError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(
        line.split_whitespace().next().unwrap_or_default().to_string(),
    ))
}
