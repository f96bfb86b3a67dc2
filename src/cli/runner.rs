//! CLI runner - executes commands

use crate::api::BooksApi;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::PagerConfig;
use crate::controller::{DisplayOptions, DisplayOutcome, PaginatedBookList};
use crate::error::{Error, Result, ResultExt};
use crate::pagination::PaginationState;
use crate::view::{BookRow, HtmlView};
use std::fs;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

const DOCUMENT_TITLE: &str = "Books";

type BookList = PaginatedBookList<BooksApi, HtmlView>;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Show {
                offset,
                format,
                output,
            } => self.show(*offset, *format, output.as_deref()).await,
            Commands::Browse { output } => self.browse(output.as_deref()).await,
            Commands::Config => self.print_config(),
        }
    }

    /// Load the config file (if any) and apply command-line overrides
    pub fn load_config(&self) -> Result<PagerConfig> {
        let mut config = match &self.cli.config {
            Some(path) => PagerConfig::from_file(path)?,
            None => {
                let base_url = self.cli.base_url.as_ref().ok_or_else(|| {
                    Error::config("No catalog base URL (use --base-url or --config)")
                })?;
                PagerConfig::new(base_url)
            }
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(limit) = self.cli.limit {
            config.limit = limit;
        }
        if let Some(policy) = self.cli.offset_policy {
            config.offset_policy = policy;
        }
        if self.cli.no_expand {
            config.expand = false;
        }

        config.validate()?;
        Ok(config)
    }

    fn build_list(&self, config: &PagerConfig) -> Result<BookList> {
        let api = BooksApi::from_config(config)?;
        Ok(PaginatedBookList::from_config(
            api,
            HtmlView::new(2, 2),
            config,
        ))
    }

    /// Fetch one page and print or save it
    async fn show(&self, offset: i64, format: OutputFormat, output: Option<&Path>) -> Result<()> {
        let config = self.load_config()?;
        let list = self.build_list(&config)?;

        let outcome = list
            .display_books(DisplayOptions::new().offset(offset))
            .await;
        let Some(shown) = outcome.offset() else {
            return Err(Error::Other(format!(
                "Could not load books at offset {offset}"
            )));
        };

        let content = match format {
            OutputFormat::Html => list.with_view(|view| view.render(DOCUMENT_TITLE).into_string()),
            OutputFormat::Text => {
                let state = list.state();
                list.with_view(|view| {
                    format!(
                        "{}\n{}\n",
                        format_text_table(view.rows()),
                        format_status(&state, view.rows().len())
                    )
                })
            }
        };

        match output {
            Some(path) => {
                write_output(path, &content)?;
                info!("Wrote page at offset {} to {}", shown, path.display());
            }
            None => print!("{content}"),
        }
        Ok(())
    }

    /// Interactive paging over stdin
    async fn browse(&self, output: Option<&Path>) -> Result<()> {
        let config = self.load_config()?;
        let list = self.build_list(&config)?;

        println!("{}", BrowseCommand::HELP);
        let outcome = list.init().await;
        report(&list, outcome, output)?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let Some(command) = BrowseCommand::parse(&line) else {
                eprintln!("Unknown command: {}", line.trim());
                continue;
            };

            let outcome = match command {
                BrowseCommand::Next => {
                    if !list.state().has_next {
                        println!("Already on the last page");
                        continue;
                    }
                    list.next(0).await
                }
                BrowseCommand::Previous => {
                    if !list.state().has_previous {
                        println!("Already on the first page");
                        continue;
                    }
                    list.previous(0).await
                }
                BrowseCommand::Reload => list.display_books(DisplayOptions::new()).await,
                BrowseCommand::Goto(offset) => {
                    list.display_books(DisplayOptions::new().offset(offset))
                        .await
                }
                BrowseCommand::Help => {
                    println!("{}", BrowseCommand::HELP);
                    continue;
                }
                BrowseCommand::Quit => break,
            };
            report(&list, outcome, output)?;
        }

        Ok(())
    }

    /// Print the effective configuration as YAML
    fn print_config(&self) -> Result<()> {
        let config = self.load_config()?;
        print!("{}", config.to_yaml()?);
        Ok(())
    }
}

/// One line of input in `browse` mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Previous,
    Reload,
    Goto(i64),
    Help,
    Quit,
}

impl BrowseCommand {
    const HELP: &'static str =
        "Commands: n(ext), p(rev), r(eload), g(oto) <offset>, h(elp), q(uit)";

    /// Parse a command line; `None` for anything unrecognised
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let command = parts.next()?.to_ascii_lowercase();
        let argument = parts.next();
        if parts.next().is_some() {
            return None;
        }

        match (command.as_str(), argument) {
            ("n" | "next", None) => Some(Self::Next),
            ("p" | "prev" | "previous", None) => Some(Self::Previous),
            ("r" | "reload", None) => Some(Self::Reload),
            ("g" | "goto", Some(offset)) => offset.parse().ok().map(Self::Goto),
            ("h" | "help" | "?", None) => Some(Self::Help),
            ("q" | "quit" | "exit", None) => Some(Self::Quit),
            _ => None,
        }
    }
}

fn report(list: &BookList, outcome: DisplayOutcome, output: Option<&Path>) -> Result<()> {
    match outcome {
        DisplayOutcome::Rendered { rows, .. } => {
            let state = list.state();
            list.with_view(|view| {
                println!("{}", format_text_table(view.rows()));
                println!("{}", format_status(&state, rows));
            });
            if let Some(path) = output {
                let html = list.with_view(|view| view.render(DOCUMENT_TITLE).into_string());
                write_output(path, &html)?;
            }
        }
        DisplayOutcome::Failed => {
            println!("Request failed, still showing offset {}", list.current_offset());
        }
        DisplayOutcome::Stale => {}
    }
    Ok(())
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Writing {}", path.display()))
}

/// Plain text rendering of the book table
pub fn format_text_table(rows: &[BookRow]) -> String {
    const HEADER: [&str; 3] = ["Title", "Author", "Categories"];

    let mut widths = HEADER.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: [&str; 3]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_line(HEADER)];
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    if rows.is_empty() {
        lines.push("(no books)".to_string());
    }
    lines.extend(rows.iter().map(|row| format_line(row.cells())));
    lines.join("\n")
}

/// One-line summary of the displayed page
pub fn format_status(state: &PaginationState, rows: usize) -> String {
    let mut status = format!(
        "Page {} (offset {}), {} book{}",
        state.page_number(),
        state.offset,
        rows,
        if rows == 1 { "" } else { "s" }
    );
    if let Some(total) = state.total {
        status.push_str(&format!(" of {total}"));
    }
    let previous = if state.has_previous { "[p]rev" } else { "-" };
    let next = if state.has_next { "[n]ext" } else { "-" };
    status.push_str(&format!("  {previous} {next}"));
    status
}
