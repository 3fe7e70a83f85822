#![allow(dead_code)]

use crate::areas::repository::Repository;
use crate::artifacts::core::diagnostic::Diagnostic;
use anyhow::Result;
use clap::{Parser, Subcommand};

mod areas;
mod artifacts;
mod commands;

const NO_COMMAND: &str = "Please enter a command.";
const NO_SUCH_COMMAND: &str = "No command with that name exists.";
const INCORRECT_OPERANDS: &str = "Incorrect operands.";
const NOT_INITIALIZED: &str = "Not in an initialized Gitlet directory.";

#[derive(Parser)]
#[command(
    name = "gitlet",
    version = "0.1.0",
    about = "A minimal local-first version-control system",
    long_about = "Gitlet is a minimal, local-first, content-addressed version-control \
    system in the style of git. It manages a single working directory, a staging area, \
    a DAG of commits, named branches, and filesystem-path remotes."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Initialize a repository in the current directory")]
    Init,
    #[command(about = "Stage a file for addition")]
    Add {
        #[arg(index = 1)]
        path: String,
    },
    #[command(about = "Stage a file for removal")]
    Rm {
        #[arg(index = 1)]
        path: String,
    },
    #[command(about = "Record the staged snapshot")]
    Commit {
        #[arg(index = 1)]
        message: Option<String>,
    },
    #[command(about = "Show the current branch's history")]
    Log,
    #[command(about = "Show every commit in the store")]
    GlobalLog,
    #[command(about = "Print ids of commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(about = "Show the working tree status")]
    Status,
    #[command(about = "Create a branch at the current head")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(about = "Delete a branch")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(about = "Move the current branch to a commit")]
    Reset {
        #[arg(index = 1)]
        commit: String,
    },
    #[command(about = "Merge a branch into the current one")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
    #[command(about = "Record a remote repository by path")]
    AddRemote {
        #[arg(index = 1)]
        name: String,
        #[arg(index = 2)]
        path: String,
    },
    #[command(about = "Forget a remote record")]
    RmRemote {
        #[arg(index = 1)]
        name: String,
    },
    #[command(about = "Move a remote branch forward to the local head")]
    Push {
        #[arg(index = 1)]
        remote: String,
        #[arg(index = 2)]
        branch: String,
    },
    #[command(about = "Mirror a remote branch as <remote>/<branch>")]
    Fetch {
        #[arg(index = 1)]
        remote: String,
        #[arg(index = 2)]
        branch: String,
    },
    #[command(about = "Fetch a remote branch and merge it")]
    Pull {
        #[arg(index = 1)]
        remote: String,
        #[arg(index = 2)]
        branch: String,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = dispatch().await {
        match err.downcast_ref::<Diagnostic>() {
            // Documented refusals print their canonical message and exit 0
            Some(diagnostic) => println!("{}", diagnostic),
            None => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        }
    }
}

async fn dispatch() -> Result<()> {
    let argv: Vec<String> = std::env::args().skip(1).collect();

    if argv.is_empty() {
        println!("{}", NO_COMMAND);
        return Ok(());
    }

    // checkout's `--` separator is meaningful, so its operands are matched
    // by hand instead of going through the parser's escape handling
    if argv[0] == "checkout" {
        return run_checkout(&argv[1..]).await;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    run(cli.command).await
}

fn report_parse_error(err: clap::Error) -> Result<()> {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::InvalidSubcommand => println!("{}", NO_SUCH_COMMAND),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            err.print()?;
        }
        _ => println!("{}", INCORRECT_OPERANDS),
    }

    Ok(())
}

fn open_repository() -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Repository::new(pwd, Box::new(std::io::stdout()))
}

async fn run_checkout(operands: &[String]) -> Result<()> {
    let mut repository = open_repository()?;
    if !repository.is_initialized() {
        println!("{}", NOT_INITIALIZED);
        return Ok(());
    }

    match operands {
        [separator, path] if separator == "--" => repository.checkout_file(path).await,
        [commit, separator, path] if separator == "--" => {
            repository.checkout_file_at(commit, path).await
        }
        [branch] if branch != "--" => repository.checkout_branch(branch).await,
        _ => {
            println!("{}", INCORRECT_OPERANDS);
            Ok(())
        }
    }
}

async fn run(command: Commands) -> Result<()> {
    let mut repository = open_repository()?;

    if !matches!(command, Commands::Init) && !repository.is_initialized() {
        println!("{}", NOT_INITIALIZED);
        return Ok(());
    }

    match command {
        Commands::Init => repository.init().await,
        Commands::Add { path } => repository.add(&path).await,
        Commands::Rm { path } => repository.rm(&path).await,
        Commands::Commit { message } => repository.commit(message.as_deref().unwrap_or("")).await,
        Commands::Log => repository.log(),
        Commands::GlobalLog => repository.global_log(),
        Commands::Find { message } => repository.find(&message),
        Commands::Status => repository.display_status().await,
        Commands::Branch { name } => repository.branch(&name),
        Commands::RmBranch { name } => repository.rm_branch(&name),
        Commands::Reset { commit } => repository.reset(&commit).await,
        Commands::Merge { branch } => repository.merge(&branch).await,
        Commands::AddRemote { name, path } => repository.add_remote(&name, &path),
        Commands::RmRemote { name } => repository.rm_remote(&name),
        Commands::Push { remote, branch } => repository.push(&remote, &branch),
        Commands::Fetch { remote, branch } => repository.fetch(&remote, &branch),
        Commands::Pull { remote, branch } => repository.pull(&remote, &branch).await,
    }
}
