//! `ats`: command-line client for the recruitment portal backend.
//!
//! Keeps its session in `--state-dir` (one file per key) and applies the
//! same guards as the web routes before every command.

mod client;
mod error;
mod session;
mod storage;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::PathBuf;

use ats_core::SessionStore;
use ats_core::completion::{check_completion, landing_tab, missing_required_fields};
use ats_core::config::{ApiConfig, DEFAULT_API_BASE_URL};
use ats_core::endpoints;
use ats_core::types::{
    Application, ApplyRequest, CandidateProfile, Document, Employee, Interview, Job, LoginRequest, LoginResponse,
    Offer, OfferStatus, RegisterRequest, RoleUpdate, StatusUpdate, UserType,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use reqwest::Method;
use serde::Serialize;

use crate::client::AtsClient;
use crate::error::CliError;
use crate::session::{Credentials, require_role, require_signed_in, require_signed_out};
use crate::storage::FileStorage;

#[derive(Parser, Debug)]
#[command(name = "ats", about = "Recruitment portal command-line client")]
struct Cli {
    #[arg(long, env = "ATS_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    /// Directory holding the saved session.
    #[arg(long, env = "ATS_STATE_DIR", default_value = ".ats")]
    state_dir: PathBuf,

    /// Print raw JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "ATS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create a candidate account.
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "ATS_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        phone: Option<String>,
    },
    Logout,
    Whoami,
    /// Check whether the candidate profile is complete.
    Completion,
    Jobs(JobsCommand),
    Apply {
        job_id: String,
    },
    Applications,
    Interviews,
    Offers(OffersCommand),
    Documents(DocumentsCommand),
    /// Staff accounts (admin only).
    Employees(EmployeesCommand),
}

#[derive(Args, Debug)]
struct JobsCommand {
    #[command(subcommand)]
    command: JobsSubcommand,
}

#[derive(Subcommand, Debug)]
enum JobsSubcommand {
    List {
        #[arg(long, default_value = "")]
        search: String,
    },
    Show {
        job_id: String,
    },
}

#[derive(Args, Debug)]
struct OffersCommand {
    #[command(subcommand)]
    command: OffersSubcommand,
}

#[derive(Subcommand, Debug)]
enum OffersSubcommand {
    List,
    Respond { offer_id: String, answer: OfferAnswer },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OfferAnswer {
    Accept,
    Decline,
}

impl From<OfferAnswer> for OfferStatus {
    fn from(answer: OfferAnswer) -> Self {
        match answer {
            OfferAnswer::Accept => Self::Accepted,
            OfferAnswer::Decline => Self::Declined,
        }
    }
}

#[derive(Args, Debug)]
struct DocumentsCommand {
    #[command(subcommand)]
    command: DocumentsSubcommand,
}

#[derive(Subcommand, Debug)]
enum DocumentsSubcommand {
    List,
    Upload {
        #[arg(long = "type", default_value = "Resume")]
        document_type: String,
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
struct EmployeesCommand {
    #[command(subcommand)]
    command: EmployeesSubcommand,
}

#[derive(Subcommand, Debug)]
enum EmployeesSubcommand {
    List,
    SetRole { employee_id: String, role: UserType },
    Delete { employee_id: String },
}

struct CliContext {
    client: AtsClient,
    store: SessionStore<FileStorage>,
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

    let mut store = SessionStore::new(FileStorage::new(&cli.state_dir));
    store.init();
    let mut ctx = CliContext { client: AtsClient::new(ApiConfig::new(&cli.base_url)), store, json: cli.json };

    match cli.command {
        Command::Login { email, password } => run_login(&mut ctx, email, password).await,
        Command::Register { first_name, last_name, email, password, phone } => {
            let request = RegisterRequest {
                first_name,
                last_name,
                email,
                password,
                phone_number: phone,
                user_type: UserType::Candidate,
            };
            run_register(&ctx, &request).await
        }
        Command::Logout => run_logout(&mut ctx).await,
        Command::Whoami => run_whoami(&ctx),
        Command::Completion => run_completion(&ctx).await,
        Command::Jobs(jobs) => run_jobs(&ctx, jobs).await,
        Command::Apply { job_id } => run_apply(&ctx, &job_id).await,
        Command::Applications => run_applications(&ctx).await,
        Command::Interviews => run_interviews(&ctx).await,
        Command::Offers(offers) => run_offers(&ctx, offers).await,
        Command::Documents(documents) => run_documents(&ctx, documents).await,
        Command::Employees(employees) => run_employees(&ctx, employees).await,
    }
}

// =============================================================================
// SESSION
// =============================================================================

async fn run_login(ctx: &mut CliContext, email: String, password: String) -> Result<(), CliError> {
    require_signed_out(&ctx.store)?;
    let resp: LoginResponse = ctx
        .client
        .request(Method::POST, endpoints::LOGIN, None, Some(&LoginRequest { email, password }))
        .await?;
    let home = ats_core::guard::home_for(resp.user.user_type);
    let session = ctx.store.login(resp.token, resp.user)?;
    if let Some(user) = &session.user {
        println!("signed in as {} ({}); web home: {home}", user.display_name(), user.user_type.label());
    }
    Ok(())
}

async fn run_register(ctx: &CliContext, request: &RegisterRequest) -> Result<(), CliError> {
    require_signed_out(&ctx.store)?;
    ctx.client.request_empty(Method::POST, endpoints::REGISTER, None, Some(request)).await?;
    println!("account created for {}; run `ats login` to continue", request.email);
    Ok(())
}

/// Local sign-out always happens; the backend call is best effort.
async fn run_logout(ctx: &mut CliContext) -> Result<(), CliError> {
    let token = ctx.store.bearer().map(str::to_owned);
    ctx.store.logout();
    if let Some(token) = token {
        if let Err(err) = ctx.client.request_empty(Method::POST, endpoints::LOGOUT, Some(&token), None::<&()>).await {
            tracing::warn!(error = %err, "logout notification failed");
        }
    }
    println!("signed out");
    Ok(())
}

fn run_whoami(ctx: &CliContext) -> Result<(), CliError> {
    let Credentials { user, .. } = require_signed_in(&ctx.store)?;
    if ctx.json {
        return print_json(&user);
    }
    println!("{} <{}>", user.display_name(), user.email);
    println!("role: {}", user.user_type.label());
    println!("id:   {}", user.user_id);
    Ok(())
}

async fn run_completion(ctx: &CliContext) -> Result<(), CliError> {
    let Credentials { token, user } = require_role(&ctx.store, UserType::Candidate)?;
    let outcome = check_completion(&user.user_id, |id| {
        let token = token.clone();
        async move { ctx.client.request(Method::GET, &endpoints::candidate_completion(&id), Some(&token), None::<&()>).await }
    })
    .await;
    if let Some(warning) = &outcome.warning {
        eprintln!("warning: {warning}");
    }
    if outcome.is_complete {
        println!("profile complete");
    } else {
        println!("profile incomplete");
        let profile: Result<CandidateProfile, _> = ctx
            .client
            .request(Method::GET, &endpoints::candidate_profile(&user.user_id), Some(&token), None::<&()>)
            .await;
        let profile = profile.unwrap_or_else(|_| CandidateProfile::seeded_from(&user));
        for field in missing_required_fields(&profile) {
            println!("  missing: {field}");
        }
    }
    if let Some(tab) = landing_tab(outcome.status()) {
        println!("dashboard opens on: {}", tab.label());
    }
    Ok(())
}

// =============================================================================
// CANDIDATE
// =============================================================================

async fn run_jobs(ctx: &CliContext, jobs: JobsCommand) -> Result<(), CliError> {
    let Credentials { token, .. } = require_signed_in(&ctx.store)?;
    match jobs.command {
        JobsSubcommand::List { search } => {
            let list: Vec<Job> = ctx.client.request(Method::GET, endpoints::JOBS, Some(&token), None::<&()>).await?;
            let list: Vec<Job> = list.into_iter().filter(|job| job.is_open && job.matches(&search)).collect();
            if ctx.json {
                return print_json(&list);
            }
            for job in &list {
                let salary = job.salary_range().map(|s| format!("  [{s}]")).unwrap_or_default();
                println!("{:>6}  {}  ({}, {}){salary}", job.job_id, job.title, job.department, job.location);
            }
            Ok(())
        }
        JobsSubcommand::Show { job_id } => {
            let job: Job = ctx.client.request(Method::GET, &endpoints::job(&job_id), Some(&token), None::<&()>).await?;
            if ctx.json {
                return print_json(&job);
            }
            println!("{}\n{} · {} · {}", job.title, job.department, job.location, job.employment_type);
            if let Some(salary) = job.salary_range() {
                println!("salary: {salary}");
            }
            println!("\n{}", job.description);
            Ok(())
        }
    }
}

async fn run_apply(ctx: &CliContext, job_id: &str) -> Result<(), CliError> {
    let Credentials { token, user } = require_role(&ctx.store, UserType::Candidate)?;
    let body = ApplyRequest { job_id: job_id.to_owned(), candidate_id: user.user_id };
    ctx.client.request_empty(Method::POST, endpoints::APPLICATIONS, Some(&token), Some(&body)).await?;
    println!("applied to job {job_id}");
    Ok(())
}

async fn run_applications(ctx: &CliContext) -> Result<(), CliError> {
    let Credentials { token, user } = require_role(&ctx.store, UserType::Candidate)?;
    let path = endpoints::candidate_applications(&user.user_id);
    let list: Vec<Application> = ctx.client.request(Method::GET, &path, Some(&token), None::<&()>).await?;
    if ctx.json {
        return print_json(&list);
    }
    for app in &list {
        let title = app.job_title.clone().unwrap_or_else(|| format!("job {}", app.job_id));
        println!("{:>6}  {:<13} {title}", app.application_id, app.status.label());
    }
    Ok(())
}

async fn run_interviews(ctx: &CliContext) -> Result<(), CliError> {
    let Credentials { token, user } = require_role(&ctx.store, UserType::Candidate)?;
    let path = endpoints::candidate_interviews(&user.user_id);
    let list: Vec<Interview> = ctx.client.request(Method::GET, &path, Some(&token), None::<&()>).await?;
    if ctx.json {
        return print_json(&list);
    }
    for interview in &list {
        let title = interview.job_title.as_deref().unwrap_or("interview");
        let location = interview.location.as_deref().unwrap_or("-");
        println!("{}  {:<10} {title} @ {location}", interview.scheduled_at, interview.status.label());
    }
    Ok(())
}

async fn run_offers(ctx: &CliContext, offers: OffersCommand) -> Result<(), CliError> {
    let Credentials { token, user } = require_role(&ctx.store, UserType::Candidate)?;
    match offers.command {
        OffersSubcommand::List => {
            let path = endpoints::candidate_offers(&user.user_id);
            let list: Vec<Offer> = ctx.client.request(Method::GET, &path, Some(&token), None::<&()>).await?;
            if ctx.json {
                return print_json(&list);
            }
            for offer in &list {
                let title = offer.job_title.as_deref().unwrap_or("offer");
                let salary = offer.salary.map(|s| format!("{s:.0}")).unwrap_or_else(|| "-".to_owned());
                println!("{:>6}  {:<9} {title}  salary {salary}", offer.offer_id, offer.status.label());
            }
            Ok(())
        }
        OffersSubcommand::Respond { offer_id, answer } => {
            let status = OfferStatus::from(answer);
            let body = StatusUpdate::new(status);
            let path = endpoints::offer_response(&offer_id);
            ctx.client.request_empty(Method::PUT, &path, Some(&token), Some(&body)).await?;
            println!("offer {offer_id} {}", status.label().to_lowercase());
            Ok(())
        }
    }
}

async fn run_documents(ctx: &CliContext, documents: DocumentsCommand) -> Result<(), CliError> {
    let Credentials { token, user } = require_role(&ctx.store, UserType::Candidate)?;
    match documents.command {
        DocumentsSubcommand::List => {
            let path = endpoints::candidate_documents(&user.user_id);
            let list: Vec<Document> = ctx.client.request(Method::GET, &path, Some(&token), None::<&()>).await?;
            if ctx.json {
                return print_json(&list);
            }
            for doc in &list {
                println!("{:>6}  {:<15} {:<20} {}", doc.document_id, doc.status.label(), doc.document_type, doc.file_name);
            }
            Ok(())
        }
        DocumentsSubcommand::Upload { document_type, path } => {
            if !ats_core::types::DOCUMENT_TYPES.contains(&document_type.as_str()) {
                return Err(CliError::InvalidArgument(format!(
                    "unknown document type `{document_type}`; expected one of: {}",
                    ats_core::types::DOCUMENT_TYPES.join(", ")
                )));
            }
            ctx.client.upload_document(&token, &user.user_id, &document_type, &path).await?;
            println!("uploaded {}", path.display());
            Ok(())
        }
    }
}

// =============================================================================
// ADMIN
// =============================================================================

async fn run_employees(ctx: &CliContext, employees: EmployeesCommand) -> Result<(), CliError> {
    let Credentials { token, user } = require_role(&ctx.store, UserType::Admin)?;
    match employees.command {
        EmployeesSubcommand::List => {
            let list: Vec<Employee> =
                ctx.client.request(Method::GET, endpoints::EMPLOYEES, Some(&token), None::<&()>).await?;
            if ctx.json {
                return print_json(&list);
            }
            for e in &list {
                println!("{:>6}  {:<14} {} {} <{}>", e.employee_id, e.user_type.label(), e.first_name, e.last_name, e.email);
            }
            Ok(())
        }
        EmployeesSubcommand::SetRole { employee_id, role } => {
            if employee_id == user.user_id {
                return Err(CliError::InvalidArgument("you cannot change your own role".to_owned()));
            }
            let path = endpoints::employee_role(&employee_id);
            ctx.client.request_empty(Method::PUT, &path, Some(&token), Some(&RoleUpdate { user_type: role })).await?;
            println!("employee {employee_id} is now {}", role.label());
            Ok(())
        }
        EmployeesSubcommand::Delete { employee_id } => {
            if employee_id == user.user_id {
                return Err(CliError::InvalidArgument("you cannot delete your own account".to_owned()));
            }
            let path = endpoints::employee(&employee_id);
            ctx.client.request_empty(Method::DELETE, &path, Some(&token), None::<&()>).await?;
            println!("employee {employee_id} deleted");
            Ok(())
        }
    }
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
