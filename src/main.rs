use std::fs::OpenOptions;
use std::io::{self, IsTerminal, Stderr, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use color_eyre::Result;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event;

use comboline::app::{App, OutputFormat};
use comboline::combobox::{Combobox, CommitSource, Settings};
use comboline::config::{self, ConfigResult};
use comboline::error::ComboError;
use comboline::input::OptionReader;
use comboline::matcher::MatchMode;
use comboline::provider::{self, RemoteResponses};

/// Longest wait for terminal input while timers or remote pages may be due
const IDLE_POLL: Duration = Duration::from_millis(50);

type Tui = Terminal<CrosstermBackend<Stderr>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MatchArg {
    #[value(name = "startswith")]
    StartsWith,
    Contains,
}

/// Autocomplete combobox for the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Option list: TOML `[[option]]` tables, a JSON array or `value<TAB>label`
    /// lines. `-` or absent reads stdin
    options: Option<PathBuf>,

    /// Select several values, shown as tags
    #[arg(long)]
    multiple: bool,

    /// Only accept values naming a declared option
    #[arg(long)]
    force_selection: bool,

    /// Typing delay before suggestions refresh, in milliseconds
    #[arg(long, value_name = "MS")]
    delay: Option<u64>,

    /// Suggestion filter
    #[arg(long = "match", value_enum)]
    match_mode: Option<MatchArg>,

    #[arg(long)]
    placeholder: Option<String>,

    /// Maximum number of characters in the input
    #[arg(long)]
    max_length: Option<usize>,

    /// Form name of the value
    #[arg(long)]
    name: Option<String>,

    /// Initially selected value (repeatable)
    #[arg(long = "value", value_name = "VALUE")]
    values: Vec<String>,

    /// Widget attribute assignment (repeatable)
    #[arg(long = "attr", value_name = "KEY=VALUE")]
    attrs: Vec<String>,

    /// Serve suggestions page by page from a background worker
    #[arg(long)]
    remote: bool,

    /// Suggestions per remote page
    #[arg(long)]
    page_size: Option<usize>,

    /// Simulated remote latency in milliseconds
    #[arg(long, value_name = "MS")]
    latency_ms: Option<u64>,

    /// Output format for the selected values
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    format: OutputFormat,

    /// Print suggestions for TEXT and exit
    #[arg(long, value_name = "TEXT", conflicts_with = "commit")]
    suggest: Option<String>,

    /// Commit TEXT as if typed and entered, print the values and exit
    #[arg(long, value_name = "TEXT")]
    commit: Option<String>,
}

fn main() -> Result<ExitCode> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    init_logging();

    let args = Args::parse();
    let ConfigResult { config, warning } = config::load_config();
    if let Some(warning) = &warning {
        log::warn!("{}", warning);
    }

    let mut settings = config.widget.settings();
    apply_args(&args, &mut settings);

    let options = read_options(args.options.as_deref())?;
    let mut combo = Combobox::new(options, settings);
    if !args.values.is_empty() {
        combo.set_values(args.values.iter().cloned());
    }
    for assignment in &args.attrs {
        combo.apply_assignment(assignment)?;
    }

    let mut remote_settings = config.remote.settings();
    if let Some(page_size) = args.page_size {
        remote_settings.page_size = page_size.max(1);
    }
    if let Some(latency_ms) = args.latency_ms {
        remote_settings.latency = Duration::from_millis(latency_ms);
    }
    let remote = args.remote.then(|| {
        let (client, responses) = provider::spawn_remote(
            combo.index().options().to_vec(),
            combo.match_mode().clone(),
            remote_settings,
        );
        combo.set_provider(client);
        responses
    });

    if let Some(text) = &args.suggest {
        return Ok(suggest(combo, remote.as_ref(), text));
    }
    if let Some(text) = &args.commit {
        return Ok(commit(combo, text, args.format));
    }

    let mut app = App::new(combo, args.format);
    app.warning = warning;
    if let Some(remote) = remote {
        app = app.with_remote(remote);
    }

    let mut terminal = init_terminal()?;
    let result = run(&mut terminal, &mut app);
    restore_terminal()?;
    result?;

    if let Some(output) = app.output()
        && !output.is_empty()
    {
        println!("{}", output);
    }
    Ok(ExitCode::SUCCESS)
}

fn apply_args(args: &Args, settings: &mut Settings) {
    settings.multiple |= args.multiple;
    settings.force_selection |= args.force_selection;
    if let Some(delay) = args.delay {
        settings.delay = Duration::from_millis(delay);
    }
    if let Some(mode) = args.match_mode {
        settings.match_mode = match mode {
            MatchArg::StartsWith => MatchMode::StartsWith,
            MatchArg::Contains => MatchMode::Contains,
        };
    }
    if let Some(placeholder) = &args.placeholder {
        settings.placeholder = placeholder.clone();
    }
    if args.max_length.is_some() {
        settings.max_length = args.max_length;
    }
    if let Some(name) = &args.name {
        settings.name = name.clone();
    }
}

fn read_options(path: Option<&Path>) -> Result<Vec<comboline::OptionElement>, ComboError> {
    let path = path.filter(|path| *path != Path::new("-"));
    if path.is_none() && io::stdin().is_terminal() {
        return Err(ComboError::NoOptions);
    }
    OptionReader::read_options(path)
}

/// Print `value<TAB>text` for each suggestion of one immediate round
fn suggest(mut combo: Combobox, remote: Option<&RemoteResponses>, text: &str) -> ExitCode {
    combo.input_mut().insert_str(text);
    combo.show_suggestions();
    if let Some(remote) = remote {
        while combo.is_loading() && remote.recv_into(&mut combo) {}
    }

    let lines: Vec<String> = combo
        .suggestions()
        .iter()
        .filter(|item| !item.is_placeholder())
        .map(|item| format!("{}\t{}", item.value, item.text))
        .collect();
    if lines.is_empty() {
        return ExitCode::FAILURE;
    }
    println!("{}", lines.join("\n"));
    ExitCode::SUCCESS
}

fn commit(mut combo: Combobox, text: &str, format: OutputFormat) -> ExitCode {
    combo.input_mut().insert_str(text);
    combo.commit(CommitSource::Enter);

    let output = format.format(&combo);
    if !output.is_empty() {
        println!("{}", output);
    }
    if combo.is_invalid() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        app.update(Instant::now());
        terminal.draw(|frame| app.render(frame))?;
        app.after_draw(Instant::now());

        let timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL);
        if event::poll(timeout)? {
            app.handle_event(event::read()?, Instant::now());
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// The UI draws on stderr so stdout carries only the result
fn init_terminal() -> io::Result<Tui> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(
        io::stderr(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stderr()))?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stderr(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )
}

/// File logging, enabled by `COMBOLINE_LOG` (an `env_logger` filter)
fn init_logging() {
    let Ok(filter) = std::env::var("COMBOLINE_LOG") else {
        return;
    };
    let path = std::env::var_os("COMBOLINE_LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("comboline.log"));
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("comboline: cannot open log file {}: {}", path.display(), err);
            return;
        }
    };

    env_logger::Builder::new()
        .parse_filters(&filter)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
