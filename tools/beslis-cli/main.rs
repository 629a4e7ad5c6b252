use beslisboom::prelude::*;
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

const PROGRESS_WIDTH: usize = 20;
const SHARE_METHOD: &str = "terminal";

/// Walk through a decision flow in the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow definition (JSON, or YAML with a .yaml/.yml extension)
    #[arg(default_value = "data/flow.yaml")]
    flow_path: String,

    /// Print tooltip terms without markers and footnotes
    #[arg(long)]
    plain: bool,

    /// Number of steps at which the progress bar is full
    #[arg(long, default_value_t = 10)]
    progress_depth: usize,

    /// Link appended when sharing a result
    #[arg(long, default_value = "https://example.org/beslisboom")]
    share_url: String,

    /// Log transitions and analytics events to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// What the user typed at the prompt.
enum Input {
    Navigate(Command),
    Share,
    Quit,
    Invalid,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // --- 1. Loading ---
    let flow = FlowDefinition::from_file(&cli.flow_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Flow unavailable: {}", e)));
    let graph = FlowGraph::new(flow);

    if let Some(title) = graph.title() {
        println!("\n=== {} ===", title);
    }
    if let Some(description) = graph.description() {
        println!("{}", description);
    }

    // --- 2. Session ---
    let session = Session::builder(graph)
        .observer(TracingObserver)
        .progress_depth(cli.progress_depth)
        .build();
    let mut navigator = Navigator::new(session);
    let mut highlight: Option<usize> = None;

    // --- 3. Interaction loop ---
    loop {
        render(navigator.session(), highlight, cli.plain);

        let Some(line) = prompt_for_input("Your choice") else {
            break;
        };

        let command = match parse_input(&line) {
            Input::Navigate(command) => command,
            Input::Share => {
                match navigator.session().share(&cli.share_url, SHARE_METHOD) {
                    Some(text) => println!("\n--- Copy the text below ---\n{}\n", text),
                    None => println!("There is no result to share yet."),
                }
                continue;
            }
            Input::Quit => break,
            Input::Invalid => {
                println!("Please enter an option number, or b, r, a, s or q.");
                continue;
            }
        };

        highlight = None;
        match navigator.dispatch(command) {
            Ok(Transition::Declined(reason)) => println!("Nothing changed: {}.", reason),
            Ok(transition) => highlight = transition.highlight(),
            Err(busy) => println!("{}", busy),
        }
    }

    println!("Goodbye!");
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_input(line: &str) -> Input {
    match line.trim().to_lowercase().as_str() {
        "b" | "back" => Input::Navigate(Command::Back),
        "r" | "restart" => Input::Navigate(Command::Restart),
        "a" | "alt" | "alternative" => Input::Navigate(Command::JumpToAlternative),
        "s" | "share" => Input::Share,
        "q" | "quit" | "exit" => Input::Quit,
        other => match other.parse::<usize>() {
            Ok(number) if number >= 1 => Input::Navigate(Command::Advance(number - 1)),
            _ => Input::Invalid,
        },
    }
}

fn render(session: &Session, highlight: Option<usize>, plain: bool) {
    let tooltips = session.graph().tooltips();

    println!();
    match session.state() {
        FlowState::Active(node) => {
            let mut footnotes = Vec::new();
            if !session.is_at_start() {
                println!("{}  Step {}", progress_bar(session.progress()), session.step());
            }
            if let Some(title) = &node.title {
                println!("## {}", annotated(title, tooltips, plain, &mut footnotes));
            }
            if !node.question.is_empty() {
                println!("{}", annotated(&node.question, tooltips, plain, &mut footnotes));
            }
            if let Some(note) = &node.note {
                println!("Note: {}", note);
            }
            println!();
            for (index, option) in node.options.iter().enumerate() {
                render_option(index, option, highlight == Some(index));
            }
            print_footnotes(&footnotes);
            let back = if session.can_go_back() { "[b] back  " } else { "" };
            println!("\n{}[r] restart  [q] quit", back);
        }
        FlowState::Result(result) => {
            println!("=== Your advice ===");
            println!("{}", result.headline());
            let body = result.body();
            let mut footnotes = Vec::new();
            if !body.is_empty() {
                println!("\n{}", annotated(&body, tooltips, plain, &mut footnotes));
            }
            print_footnotes(&footnotes);
            if session.has_alternative() {
                println!("\nWould you like to see a more environmentally friendly alternative? [a]");
            }
            println!("\n[s] share  [r] restart  [q] quit");
        }
        FlowState::Unknown(id) => {
            println!("Unknown step: {}", id);
            println!("\n[b] back  [r] restart  [q] quit");
        }
    }
}

fn render_option(index: usize, option: &FlowOption, highlighted: bool) {
    let marker = if highlighted { "->" } else { "  " };
    let disabled = if option.disabled { " (unavailable)" } else { "" };
    println!("{} {}. {}{}", marker, index + 1, option.label, disabled);

    let Some(card) = &option.card else {
        return;
    };
    match (&card.price, &card.rd_value) {
        (Some(price), Some(rd)) => println!("      {} | Rd {}", price, rd),
        (Some(price), None) => println!("      {}", price),
        (None, Some(rd)) => println!("      Rd {}", rd),
        (None, None) => {}
    }
    for pro in &card.pros {
        println!("      + {}", pro);
    }
    for con in &card.cons {
        println!("      - {}", con);
    }
    if let Some(description) = &card.description {
        println!("      {}", description);
    }
}

/// Renders `text` with tooltip terms marked by `*`, collecting their explanations.
fn annotated<'a>(
    text: &'a str,
    tooltips: &'a TooltipIndex,
    plain: bool,
    footnotes: &mut Vec<(&'a str, &'a str)>,
) -> String {
    if plain {
        return text.to_string();
    }
    let segments = annotate(text, tooltips);
    for (term, explanation) in segments.clone().terms() {
        let key = term.to_lowercase();
        if !footnotes.iter().any(|(seen, _)| seen.to_lowercase() == key) {
            footnotes.push((term, explanation));
        }
    }
    segments.render_with(|term, _| format!("{}*", term))
}

fn print_footnotes(footnotes: &[(&str, &str)]) {
    if footnotes.is_empty() {
        return;
    }
    println!();
    for (term, explanation) in footnotes {
        println!("  * {}: {}", term, explanation);
    }
}

fn progress_bar(progress: f64) -> String {
    let filled = (progress * PROGRESS_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH.saturating_sub(filled))
    )
}

/// A helper function to prompt the user and read a line of input.
/// Returns `None` once stdin is closed.
fn prompt_for_input(prompt_text: &str) -> Option<String> {
    let mut line = String::new();

    print!("> {}: ", prompt_text);
    io::stdout().flush().ok()?;

    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
