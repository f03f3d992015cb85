//! ragdesk — interactive terminal client for an organization-scoped RAG
//! service.
//!
//! Set RAGDESK_API_URL (or API_URL) to point at the backend; defaults to
//! a local instance. The shell owns no state of its own: everything lives
//! in the session layer and is re-rendered after each command.

use anyhow::Context;
use clap::Parser;
use ragdesk_api_client::{ApiClient, RagBackend};
use ragdesk_cli::{init_tracing, is_affirmative, parse_command, rank_label, Command};
use ragdesk_core::models::{ChatMessage, Document, Role};
use ragdesk_core::preview;
use ragdesk_session::{ChatSession, DocumentPanel, OrgStore};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "ragdesk", about = "Terminal client for an organization-scoped RAG service")]
struct Cli {
    /// Backend base URL (overrides RAGDESK_API_URL)
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let client = match cli.api_url {
        Some(url) => ApiClient::new(url),
        None => ApiClient::from_env(),
    }
    .context("Failed to create API client")?;

    println!("ragdesk — {}", client.base_url());
    println!("Type 'help' for commands.");

    let api = Arc::new(client);
    let backend: Arc<dyn RagBackend> = api.clone();
    let orgs = Arc::new(OrgStore::new(backend.clone()));
    let mut panel = DocumentPanel::new(backend.clone(), orgs.clone());
    let mut chat = ChatSession::new(backend, orgs.clone());

    orgs.load().await;
    panel.load_documents().await;
    print_orgs(&orgs);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_prompt(&orgs)?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read input")?;

        match parse_command(&line) {
            Command::Quit => break,
            Command::Empty => {}
            Command::Help => print_help(),
            Command::Orgs => print_orgs(&orgs),
            Command::Use(id) => {
                if orgs.select_by_id(id) {
                    panel.load_documents().await;
                    report_panel(&panel);
                    print_documents(panel.documents());
                } else {
                    println!("No organization with id {}.", id);
                }
            }
            Command::OrgNew(name) => match orgs.create(&name).await {
                Ok(Some(org)) => {
                    println!("Created organization '{}' (id {}).", org.name, org.id);
                    orgs.select(org);
                    panel.load_documents().await;
                    report_panel(&panel);
                }
                Ok(None) => {}
                Err(_) => println!("Failed to create organization"),
            },
            Command::OrgShow(id) => match api.get_organization(id).await {
                Ok(org) => {
                    let out = serde_json::to_string_pretty(&org)
                        .context("Serialize organization")?;
                    println!("{}", out);
                }
                Err(error) => println!("Failed to fetch organization: {}", error),
            },
            Command::OrgRm(id) => match orgs.delete(id).await {
                Ok(()) => {
                    println!("Organization {} deleted.", id);
                    panel.load_documents().await;
                    report_panel(&panel);
                }
                Err(_) => println!("Failed to delete organization"),
            },
            Command::Docs => {
                panel.load_documents().await;
                report_panel(&panel);
                print_documents(panel.documents());
            }
            Command::Add(title) => {
                let content = read_block(&mut lines, "Content (finish with a single '.'):")?;
                if panel.upload(&title, &content).await {
                    println!("Uploaded '{}'.", title);
                } else {
                    report_panel(&panel);
                }
            }
            Command::Edit(id) => {
                let title = read_line_with(&mut lines, "New title (blank keeps current): ")?;
                let content =
                    read_block(&mut lines, "New content (just '.' keeps current):")?;
                let title = (!title.trim().is_empty()).then_some(title.as_str());
                let content = (!content.is_empty()).then_some(content.as_str());
                if panel.update(id, title, content).await {
                    println!("Updated document {}.", id);
                } else {
                    report_panel(&panel);
                }
            }
            Command::Rm(id) => {
                let answer =
                    read_line_with(&mut lines, &format!("Delete document {}? [y/N] ", id))?;
                if is_affirmative(&answer) {
                    panel.delete(id).await;
                    report_panel(&panel);
                }
            }
            Command::Find(query) => {
                panel.search(&query).await;
                report_panel(&panel);
                print_search_results(panel.search_results());
            }
            Command::Ask(question) => {
                chat.send(&question).await;
                match chat.error() {
                    Some(banner) => println!("{}", banner),
                    None => {
                        if let Some(reply) = chat.messages().last() {
                            print_message(reply);
                        }
                    }
                }
            }
            Command::Chat => print_transcript(chat.messages()),
            Command::Clear => {
                chat.clear();
                println!("Transcript cleared.");
            }
            Command::Unknown(input) => {
                println!("Unrecognized command: '{}'. Try 'help'.", input);
            }
        }
    }

    Ok(())
}

fn print_prompt(orgs: &OrgStore) -> anyhow::Result<()> {
    match orgs.selected() {
        Some(org) => print!("{}> ", org.name),
        None => print!("(no org)> "),
    }
    io::stdout().flush().context("Flush prompt")?;
    Ok(())
}

/// Read one line after printing a prompt.
fn read_line_with(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> anyhow::Result<String> {
    print!("{}", prompt);
    io::stdout().flush().context("Flush prompt")?;
    match lines.next() {
        Some(line) => Ok(line.context("Failed to read input")?),
        None => Ok(String::new()),
    }
}

/// Collect a multi-line block terminated by a lone `.` line. Enter inside
/// the block inserts a line break; only the terminator submits.
fn read_block(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> anyhow::Result<String> {
    println!("{}", prompt);
    let mut collected: Vec<String> = Vec::new();
    for line in lines {
        let line = line.context("Failed to read input")?;
        if line.trim() == "." {
            break;
        }
        collected.push(line);
    }
    Ok(collected.join("\n"))
}

/// Surface the panel's error banner, if any, after an operation.
fn report_panel(panel: &DocumentPanel) {
    if let Some(banner) = panel.error() {
        println!("{}", banner);
    }
}

fn print_orgs(orgs: &OrgStore) {
    let all = orgs.organizations();
    if all.is_empty() {
        println!("No organizations yet. Create one with 'org new <name>'.");
        return;
    }
    let selected = orgs.selected_id();
    println!("Organizations:");
    for org in &all {
        let marker = if selected == Some(org.id) { "*" } else { " " };
        println!("  {} [{}] {}", marker, org.id, org.name);
    }
}

fn print_documents(documents: &[Document]) {
    if documents.is_empty() {
        println!("No documents.");
        return;
    }
    for doc in documents {
        let when = doc
            .created_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!("  [{}] {}  {}", doc.id, doc.title, when);
        println!("      {}", preview(&doc.content));
    }
}

fn print_search_results(results: &[Document]) {
    if results.is_empty() {
        println!("No results.");
        return;
    }
    for (index, doc) in results.iter().enumerate() {
        println!("  {} [{}] {}", rank_label(index), doc.id, doc.title);
        println!("      {}", preview(&doc.content));
    }
}

fn print_message(message: &ChatMessage) {
    let speaker = match message.role {
        Role::User => "you",
        Role::Assistant => "assistant",
    };
    println!("{}: {}", speaker, message.content);
    if !message.sources.is_empty() {
        let titles: Vec<&str> = message.sources.iter().map(|s| s.title.as_str()).collect();
        println!("  sources: {}", titles.join(", "));
    }
}

fn print_transcript(messages: &[ChatMessage]) {
    if messages.is_empty() {
        println!("Transcript is empty.");
        return;
    }
    for message in messages {
        print_message(message);
    }
}

fn print_help() {
    println!("  orgs                list organizations");
    println!("  use <id>            select an organization");
    println!("  org new <name>      create an organization");
    println!("  org show <id>       fetch one organization");
    println!("  org rm <id>         delete an organization");
    println!("  docs                list documents in the selected organization");
    println!("  add <title>         upload a document (content entered next)");
    println!("  edit <id>           update a document");
    println!("  rm <id>             delete a document (asks first)");
    println!("  find <query>        relevance search");
    println!("  ask <question>      query the assistant");
    println!("  chat                show the transcript");
    println!("  clear               discard the transcript");
    println!("  quit                leave");
}
