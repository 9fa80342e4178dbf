mod inventory;

use clap::Parser;
use cloudssh_config::Config;
use cloudssh_core::{
    find_matches, find_target, join_user_host, pick, render, resolve, split_user_host, Candidate,
    Choice, DEFAULT_FORMAT,
};
use colored::Colorize;
use std::io::{self, Write};
use std::process::Command;

/// ssh, with cloud inventory lookup for the hostname.
///
/// The whole command line is forwarded to the system ssh; only the target
/// token is resolved against the configured cloud accounts first. Help and
/// version flags are intentionally not intercepted, ssh owns every option.
#[derive(Parser)]
#[command(name = "cloud-ssh")]
#[command(about = "ssh wrapper that resolves hostnames against live cloud inventory")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Arguments forwarded to ssh, with `[user@]query` in place of a hostname
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
    args: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt::init();

    let config = cloudssh_config::load()?;

    let mut args = cli.args;

    let Some((idx, target)) = find_target(&args).map(|(idx, t)| (idx, t.to_string())) else {
        // Nothing in the argument list looks like a hostname; let ssh
        // complain about it instead of guessing.
        return exec_ssh(args);
    };

    let (user, query) = split_user_host(&target);
    let user = user.map(str::to_string);
    let query = query.to_string();

    if config.is_empty() {
        println!(
            "{}",
            "Can't find any configuration or ENV variables. Check the cloud-ssh README for documentation."
                .yellow()
        );
        return exec_ssh(args);
    }

    let providers = inventory::providers_from_config(&config).await;
    let inventory = cloudssh_cloud::fetch_all(providers).await;
    let candidates = find_matches(&inventory, &query);

    let chosen = match resolve(candidates) {
        Choice::Unmatched => {
            println!(
                "{}",
                "Can't find cloud instance, trying to connect anyway".yellow()
            );
            None
        }
        Choice::Auto(candidate) => {
            println!("{}", "Found cloud instance:".green());
            println!("{}", render_candidate(&config, &candidate));
            Some(candidate)
        }
        Choice::Ambiguous(candidates) => {
            println!("{}", "Found multiple instances:".green());
            for (i, candidate) in candidates.iter().enumerate() {
                println!("{}) {}", i + 1, render_candidate(&config, candidate));
            }
            Some(prompt_choice(&candidates)?.clone())
        }
    };

    if let Some(candidate) = chosen {
        let user = user.or_else(|| default_user(&config, &candidate));
        args[idx] = join_user_host(user.as_deref(), &candidate.addr);
    }

    exec_ssh(args)
}

/// Read a 1-based selection from stdin. Anything invalid is fatal.
fn prompt_choice(candidates: &[Candidate]) -> anyhow::Result<&Candidate> {
    print!("Choose instance: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(pick(candidates, &line)?)
}

/// Render a candidate with its account's template, or the default one.
fn render_candidate(config: &Config, candidate: &Candidate) -> String {
    let template = config
        .accounts
        .get(&candidate.cloud)
        .and_then(|account| account.output_format.as_deref())
        .unwrap_or(DEFAULT_FORMAT);

    render(candidate, template)
}

fn default_user(config: &Config, candidate: &Candidate) -> Option<String> {
    config
        .accounts
        .get(&candidate.cloud)
        .and_then(|account| account.default_user.clone())
}

/// Replace this process with the system ssh client.
///
/// On success this never returns; ssh inherits the terminal and its exit
/// status becomes ours.
#[cfg(unix)]
fn exec_ssh(args: Vec<String>) -> anyhow::Result<()> {
    use std::os::unix::process::CommandExt;

    tracing::info!("Executing: ssh {}", args.join(" "));

    let err = Command::new("ssh").args(&args).exec();
    Err(anyhow::anyhow!("Failed to execute ssh: {err}"))
}

/// No exec on this platform; run ssh as a child and forward its status.
#[cfg(not(unix))]
fn exec_ssh(args: Vec<String>) -> anyhow::Result<()> {
    tracing::info!("Executing: ssh {}", args.join(" "));

    let status = Command::new("ssh").args(&args).status()?;
    std::process::exit(status.code().unwrap_or(1));
}
