use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::render::render_state;
use crate::explorer::Explorer;
use crate::model::{ParseSortDirectionError, SortDirection};
use crate::source::CountrySource;

pub const HELP: &str = "\
Type to filter by name. Commands:
  :sort asc|desc   change sort direction
  :page N          jump to page N (1-based)
  :next / :prev    move one page
  :size N          rows per page
  :refresh         fetch again
  :help            show this text
  :quit            exit
";

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Filter(String),
    Sort(SortDirection),
    /// Zero-based page index.
    Page(usize),
    Next,
    Prev,
    Size(usize),
    Refresh,
    Help,
    Quit,
}

/// Parse a line. Anything not starting with `:` is filter text, verbatim.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let Some(rest) = line.strip_prefix(':') else {
        return Ok(Command::Filter(line.to_string()));
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    match (name, arg) {
        ("sort", Some(direction)) => direction
            .parse()
            .map(Command::Sort)
            .map_err(|e: ParseSortDirectionError| e.to_string()),
        ("page", Some(n)) => match n.parse::<usize>() {
            Ok(page) if page > 0 => Ok(Command::Page(page - 1)),
            _ => Err(format!("invalid page '{n}' (pages start at 1)")),
        },
        ("size", Some(n)) => match n.parse::<usize>() {
            Ok(size) if size > 0 => Ok(Command::Size(size)),
            _ => Err(format!("invalid page size '{n}'")),
        },
        ("next", None) => Ok(Command::Next),
        ("prev", None) => Ok(Command::Prev),
        ("refresh", None) => Ok(Command::Refresh),
        ("help", None) => Ok(Command::Help),
        ("quit" | "q", None) => Ok(Command::Quit),
        _ => Err(format!("unknown command ':{rest}' (try :help)")),
    }
}

/// Drive `explorer` from stdin until `:quit` or end of input.
///
/// Every published state is rendered to stdout as it arrives.
pub async fn run<S: CountrySource>(explorer: Explorer<S>) -> anyhow::Result<()> {
    let mut updates = explorer.subscribe();
    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let rendered = render_state(&updates.borrow_and_update());
            if !rendered.is_empty() {
                print!("{rendered}");
            }
        }
    });

    print!("{HELP}");
    explorer.refresh();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(Command::Filter(text)) => {
                explorer.set_filter(text);
            }
            Ok(Command::Sort(direction)) => {
                explorer.set_sort(direction);
            }
            Ok(Command::Page(page)) => {
                explorer.set_page(page);
            }
            Ok(Command::Next) => {
                explorer.next_page();
            }
            Ok(Command::Prev) => {
                explorer.prev_page();
            }
            Ok(Command::Size(size)) => {
                explorer.set_page_size(size);
            }
            Ok(Command::Refresh) => {
                explorer.refresh();
            }
            Ok(Command::Help) => print!("{HELP}"),
            Ok(Command::Quit) => break,
            Err(message) => eprintln!("{message}"),
        }
    }

    drop(explorer);
    printer.abort();
    Ok(())
}
