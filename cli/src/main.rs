use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use market::config::{Timeouts, timeout_secs};
use market::guard::{AuthorizationDecision, RoleGuard};
use market::types::{Address, Credentials, EntryCommand, EntryDraft, EntryKind, RegisterForm, TeacherFilter, TeacherQuery};
use market::{ApiClient, ApiError, ClientConfig, ConfigError, ErrorInfo, FileStore, MarketStore, Role, Session, Slice, Status};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const SESSION_DIR: &str = ".hireteach";
const SESSION_FILE: &str = "session.json";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("{} ({})", .0.message, .0.code)]
    Request(ErrorInfo),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "hireteach", about = "HireTeach marketplace command-line client")]
struct Cli {
    /// API base URL; overrides `HIRETEACH_API_URL`.
    #[arg(long)]
    base_url: Option<String>,

    /// `token` or `bearer`; overrides `HIRETEACH_AUTH_SCHEME`.
    #[arg(long)]
    auth_scheme: Option<String>,

    /// Where the session token is stored.
    #[arg(long, env = "HIRETEACH_SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// Whole-request timeout in seconds, `0` for none; overrides `HIRETEACH_REQUEST_TIMEOUT_SECS`.
    #[arg(long)]
    timeout: Option<u64>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "HIRETEACH_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account; signs in when the server issues a token.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "HIRETEACH_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long, value_parser = parse_role)]
        role: Role,
    },
    /// Forget the stored session.
    Logout,
    /// Show the signed-in user as the backend sees it.
    Whoami,
    /// Evaluate the route guard for an allow-list of roles.
    Access {
        #[arg(long = "allow", required = true, value_parser = parse_role)]
        allow: Vec<Role>,
    },
    /// Browse the teacher directory.
    Teachers(TeacherArgs),
    /// Show one teacher.
    Teacher {
        id: i64,
    },
    /// List the question bank.
    Questions,
    Address(AddressCommand),
    Entry(EntryArgs),
}

#[derive(Args, Debug)]
struct TeacherArgs {
    #[arg(long)]
    subject: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    search: Option<String>,
    /// Applied locally after the list is fetched.
    #[arg(long)]
    min_experience: Option<u32>,
}

#[derive(Args, Debug)]
struct AddressCommand {
    #[command(subcommand)]
    command: AddressSubcommand,
}

#[derive(Subcommand, Debug)]
enum AddressSubcommand {
    List,
    Add {
        #[arg(long)]
        line1: String,
        #[arg(long)]
        line2: Option<String>,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        postal_code: Option<String>,
        #[arg(long)]
        country: Option<String>,
    },
}

#[derive(Args, Debug)]
struct EntryArgs {
    #[command(subcommand)]
    command: EntrySubcommand,
}

#[derive(Subcommand, Debug)]
enum EntrySubcommand {
    List {
        kind: EntryKind,
    },
    Add {
        kind: EntryKind,
        #[command(flatten)]
        fields: EntryFields,
    },
    Update {
        kind: EntryKind,
        id: i64,
        #[command(flatten)]
        fields: EntryFields,
    },
    Remove {
        kind: EntryKind,
        id: i64,
    },
}

#[derive(Args, Debug, Clone)]
struct EntryFields {
    #[arg(long)]
    title: String,
    #[arg(long)]
    organization: String,
    #[arg(long)]
    start_year: i32,
    #[arg(long)]
    end_year: Option<i32>,
    #[arg(long)]
    description: Option<String>,
}

impl From<EntryFields> for EntryDraft {
    fn from(fields: EntryFields) -> Self {
        Self {
            title: fields.title,
            organization: fields.organization,
            start_year: fields.start_year,
            end_year: fields.end_year,
            description: fields.description.filter(|d| !d.trim().is_empty()),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn parse_role(raw: &str) -> Result<Role, String> {
    match Role::parse(raw) {
        Role::Unknown => Err(format!("unknown role '{raw}' (expected teacher, school or recruiter)")),
        role => Ok(role),
    }
}

fn default_session_path() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(SESSION_DIR).join(SESSION_FILE),
        None => PathBuf::from(format!("{SESSION_DIR}-{SESSION_FILE}")),
    }
}

/// Layer command-line overrides on top of the environment config.
fn client_config(env: ClientConfig, cli: &Cli) -> Result<ClientConfig, ConfigError> {
    let scheme = match &cli.auth_scheme {
        Some(raw) => raw.parse()?,
        None => env.auth_scheme,
    };
    let timeouts = Timeouts { request: cli.timeout.map_or(env.timeouts.request, timeout_secs), ..env.timeouts };
    let base = match &cli.base_url {
        Some(url) => ClientConfig::new(url)?,
        None => env,
    };
    Ok(base.with_auth_scheme(scheme).with_timeouts(timeouts))
}

async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let config = client_config(ClientConfig::from_env()?, &cli)?;
    let session_path = cli.session_file.clone().unwrap_or_else(default_session_path);
    tracing::debug!(base_url = %config.base_url, session = %session_path.display(), "starting");

    let session = Session::new(FileStore::new(session_path));
    let api = ApiClient::new(&config, session)?;
    let store = MarketStore::new();

    match cli.command {
        Command::Login { email, password } => {
            let response = api.login(&Credentials { email, password }).await?;
            print_json(&serde_json::json!({ "signed_in": true, "name": response.name, "role": response.role }))?;
        }
        Command::Register { name, email, password, role } => {
            let response = api.register(&RegisterForm { name, email, password, role }).await?;
            print_json(&serde_json::json!({ "registered": true, "signed_in": response.token.is_some() }))?;
        }
        Command::Logout => {
            api.logout()?;
            print_json(&serde_json::json!({ "signed_in": false }))?;
        }
        Command::Whoami => {
            store.load_current_user(&api).await;
            print_slice(&store.current_user)?;
        }
        Command::Access { allow } => return run_access(&api, allow).await,
        Command::Teachers(args) => run_teachers(&api, &store, args).await?,
        Command::Teacher { id } => {
            store.load_teacher(&api, id).await;
            print_slice(&store.teacher)?;
        }
        Command::Questions => {
            store.load_questions(&api).await;
            print_slice(&store.questions)?;
        }
        Command::Address(address) => run_address(&api, &store, address).await?,
        Command::Entry(entry) => run_entry(&api, &store, entry).await?,
    }
    Ok(ExitCode::SUCCESS)
}

async fn run_access(api: &ApiClient, allow: Vec<Role>) -> Result<ExitCode, CliError> {
    let state = RoleGuard::new(allow).evaluate(api.session(), api).await;
    let decision = state.decision();
    print_json(&serde_json::json!({
        "decision": decision_label(decision),
        "redirect": decision.redirect_path(),
    }))?;
    Ok(if decision == AuthorizationDecision::Allow { ExitCode::SUCCESS } else { ExitCode::from(2) })
}

fn decision_label(decision: AuthorizationDecision) -> &'static str {
    match decision {
        AuthorizationDecision::Pending => "pending",
        AuthorizationDecision::RedirectUnauthenticated => "redirect-unauthenticated",
        AuthorizationDecision::RedirectUnauthorized => "redirect-unauthorized",
        AuthorizationDecision::Allow => "allow",
    }
}

async fn run_teachers(api: &ApiClient, store: &MarketStore, args: TeacherArgs) -> Result<(), CliError> {
    let query = TeacherQuery { subject: args.subject, city: args.city, search: args.search };
    store.load_teachers(api, &query).await;
    let filter = TeacherFilter { min_experience: args.min_experience, ..TeacherFilter::default() };
    store.teachers.with(|resource| match resource.status() {
        Status::Succeeded => print_json(&filter.apply(resource.data().map_or(&[][..], Vec::as_slice))),
        _ => Err(failure(resource.error())),
    })
}

async fn run_address(api: &ApiClient, store: &MarketStore, address: AddressCommand) -> Result<(), CliError> {
    match address.command {
        AddressSubcommand::List => {
            store.load_addresses(api).await;
            print_slice(&store.addresses)
        }
        AddressSubcommand::Add { line1, line2, city, state, postal_code, country } => {
            let draft = Address { id: None, line1, line2, city, state, postal_code, country };
            store.add_address(api, &draft).await;
            print_slice(&store.address_save)
        }
    }
}

async fn run_entry(api: &ApiClient, store: &MarketStore, entry: EntryArgs) -> Result<(), CliError> {
    let command = match entry.command {
        EntrySubcommand::List { kind } => {
            store.load_entries(api, kind).await;
            return print_slice(store.entries(kind));
        }
        EntrySubcommand::Add { kind, fields } => EntryCommand::Create { kind, draft: fields.into() },
        EntrySubcommand::Update { kind, id, fields } => EntryCommand::Update { kind, id, draft: fields.into() },
        EntrySubcommand::Remove { kind, id } => EntryCommand::Delete { kind, id },
    };
    store.submit_entry(api, &command).await;
    store.entry_save.with(|saved| match saved.status() {
        Status::Succeeded => print_slice(store.entries(command.kind())),
        _ => Err(failure(saved.error())),
    })
}

fn failure(error: Option<&ErrorInfo>) -> CliError {
    CliError::Request(error.cloned().unwrap_or_else(ErrorInfo::fallback))
}

fn print_slice<T: Serialize>(slice: &Slice<T>) -> Result<(), CliError> {
    slice.with(|resource| match resource.status() {
        Status::Succeeded => print_json(&resource.data()),
        _ => Err(failure(resource.error())),
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
