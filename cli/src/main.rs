use cases::{AgentKind, AnalystAction, CaseError, SortKey, StatusFilter};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("agent call failed: {0}")]
    AgentFailed(String),
    #[error(transparent)]
    InvalidArgument(#[from] CaseError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "dispute-cli", about = "Dispute desk API CLI")]
struct Cli {
    #[arg(long, env = "DISPUTE_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    Ping,
    /// Send one message to an agent: case-manager, merchant-intelligence,
    /// evidence-correlator, risk-scoring, or resolution.
    Agent {
        agent: String,
        message: String,
    },
    Cases(CasesCommand),
}

#[derive(Args, Debug)]
struct CasesCommand {
    #[command(subcommand)]
    command: CasesSubcommand,
}

#[derive(Subcommand, Debug)]
enum CasesSubcommand {
    List {
        #[arg(long, default_value = "all")]
        status: String,
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value = "risk")]
        sort: String,
    },
    Read {
        case_id: String,
    },
    Decide {
        case_id: String,
        #[arg(long, help = "approve, deny, request_info, or escalate")]
        action: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext { base_url: cli.base_url };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Agent { agent, message } => run_agent(&ctx, &agent, message).await,
        Command::Cases(cases) => run_cases(&ctx, cases).await,
    }
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let response = client.get(endpoint(cli, "/healthz")).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError {
            status: status.as_u16(),
            message: "health check failed".to_owned(),
        });
    }
    println!("ok");
    Ok(())
}

async fn run_agent(cli: &CliContext, agent: &str, message: String) -> Result<(), CliError> {
    let agent: AgentKind = agent.parse()?;
    let body = serde_json::json!({ "agent": agent, "message": message });
    let json = api_request(cli, reqwest::Method::POST, "/api/agent", Some(body)).await?;
    print_json(&json)?;
    if json.get("success").and_then(Value::as_bool) == Some(false) {
        let error = json.get("error").and_then(Value::as_str).unwrap_or("unknown error");
        return Err(CliError::AgentFailed(error.to_owned()));
    }
    Ok(())
}

async fn run_cases(cli: &CliContext, cases: CasesCommand) -> Result<(), CliError> {
    match cases.command {
        CasesSubcommand::List { status, query, sort } => {
            let path = list_path(&status, &query, &sort)?;
            let json = api_request(cli, reqwest::Method::GET, &path, None).await?;
            print_json(&json)?;
            Ok(())
        }
        CasesSubcommand::Read { case_id } => {
            let path = format!("/api/cases/{case_id}");
            let json = api_request(cli, reqwest::Method::GET, &path, None).await?;
            print_json(&json)?;
            Ok(())
        }
        CasesSubcommand::Decide { case_id, action, notes } => {
            let action: AnalystAction = action.parse()?;
            let path = format!("/api/cases/{case_id}/disposition");
            let body = serde_json::json!({ "action": action, "notes": notes });
            let json = api_request(cli, reqwest::Method::POST, &path, Some(body)).await?;
            print_json(&json)?;
            Ok(())
        }
    }
}

/// Validate list arguments locally and build the query path.
fn list_path(status: &str, query: &str, sort: &str) -> Result<String, CliError> {
    let status: StatusFilter = status.parse()?;
    let sort: SortKey = sort.parse()?;
    let mut path = format!("/api/cases?status={status}&sort={sort}");
    if !query.is_empty() {
        path.push_str("&q=");
        path.push_str(&encode_query_value(query));
    }
    Ok(path)
}

/// Percent-encode everything outside the unreserved set.
fn encode_query_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

fn endpoint(cli: &CliContext, path: &str) -> String {
    format!("{}{}", cli.base_url.trim_end_matches('/'), path)
}

async fn api_request(
    cli: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
) -> Result<Value, CliError> {
    let client = reqwest::Client::new();
    let request = client.request(method, endpoint(cli, path));
    let request = if let Some(json) = body {
        request.json(&json)
    } else {
        request
    };

    let response = request.send().await?;
    let status = response.status();
    let value = response
        .json::<Value>()
        .await
        .unwrap_or_else(|_| Value::Null);

    if !status.is_success() {
        return Err(CliError::ServerError {
            status: status.as_u16(),
            message: value.to_string(),
        });
    }

    Ok(value)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
