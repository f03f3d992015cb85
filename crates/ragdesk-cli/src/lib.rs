//! Shared helpers for the ragdesk binary: command parsing, confirmation
//! handling, and tracing setup.

/// A parsed line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `orgs` — list organizations.
    Orgs,
    /// `use <id>` — select an organization.
    Use(i64),
    /// `org new <name>` — create an organization.
    OrgNew(String),
    /// `org show <id>` — fetch one organization from the backend.
    OrgShow(i64),
    /// `org rm <id>` — delete an organization.
    OrgRm(i64),
    /// `docs` — list the selected organization's documents.
    Docs,
    /// `add <title>` — upload a document (content follows interactively).
    Add(String),
    /// `edit <id>` — update a document's title/content.
    Edit(i64),
    /// `rm <id>` — delete a document (asks for confirmation).
    Rm(i64),
    /// `find <query>` — relevance search.
    Find(String),
    /// `ask <question>` — query the assistant.
    Ask(String),
    /// `chat` — print the transcript.
    Chat,
    /// `clear` — discard the transcript.
    Clear,
    Help,
    Quit,
    /// Blank line: nothing to do.
    Empty,
    Unknown(String),
}

/// Parse one line of input. Enter submits the whole line; commands that
/// need multi-line text (document content) collect it in a follow-up
/// prompt instead.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "orgs" => Command::Orgs,
        "use" => parse_id(rest).map(Command::Use).unwrap_or_else(unknown(line)),
        "org" => {
            let (sub, arg) = match rest.split_once(char::is_whitespace) {
                Some((sub, arg)) => (sub, arg.trim()),
                None => (rest, ""),
            };
            match sub {
                "new" if !arg.is_empty() => Command::OrgNew(arg.to_string()),
                "show" => parse_id(arg).map(Command::OrgShow).unwrap_or_else(unknown(line)),
                "rm" => parse_id(arg).map(Command::OrgRm).unwrap_or_else(unknown(line)),
                _ => Command::Unknown(line.to_string()),
            }
        }
        "docs" => Command::Docs,
        "add" if !rest.is_empty() => Command::Add(rest.to_string()),
        "edit" => parse_id(rest).map(Command::Edit).unwrap_or_else(unknown(line)),
        "rm" => parse_id(rest).map(Command::Rm).unwrap_or_else(unknown(line)),
        "find" => Command::Find(rest.to_string()),
        "ask" => Command::Ask(rest.to_string()),
        "chat" => Command::Chat,
        "clear" => Command::Clear,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

fn parse_id(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}

fn unknown(line: &str) -> impl Fn() -> Command + '_ {
    move || Command::Unknown(line.to_string())
}

/// Interpret a confirmation answer: only an explicit yes is a yes.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// 1-based rank label for a search result's position.
pub fn rank_label(index: usize) -> String {
    format!("{}.", index + 1)
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
