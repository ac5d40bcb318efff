use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};
use sysinfo::System;

#[macro_use]
mod output;
mod project;
mod result;
mod sanitizer;

use crate::output::{BLUE, GREEN, NO_COLOR, RED};
use crate::project::Project;
use crate::result::{Result, SweepError};
use crate::sanitizer::Sanitizer;

#[derive(Parser)]
#[command(name = "presweep", version, about = "A build runner that sweeps stale output directories before each build")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project skeleton
    Init { name: String },
    /// Sweep the declared output directories, then run the build steps
    Build,
    /// Sweep the declared output directories without building
    Clean,
}

macro_rules! manifest_template {
    () => {
        "{{
    \"name\": \"{}\",
    \"output\": [{{ \"dir\": \"bin\" }}],
    \"build_steps\": [
        \"mkdir -p bin\",
        \"cc -O2 -o bin/{} src/main.c\"
    ]
}}
"
    };
}

macro_rules! hello_template {
    () => {
        "#include <stdio.h>

int main(void) {
    printf(\"Hello, world!\\n\");
    return 0;
}
"
    };
}

fn init(name: &str) -> Result<()> {
    let root = PathBuf::from(name);
    std::fs::create_dir(&root)?;
    std::fs::create_dir(root.join("src"))?;
    {
        let mut manifest = std::fs::File::create(root.join("presweep.json"))?;
        manifest.write_all(format!(manifest_template!(), name, name).as_bytes())?;
    }
    {
        let mut source = std::fs::File::create(root.join("src").join("main.c"))?;
        source.write_all(hello_template!().as_bytes())?;
    }
    Command::new("git").arg("init").arg(name).output()?;
    color_println!(GREEN, "Project '{}' successfully created.", name);
    Ok(())
}

fn parallel_jobs() -> usize {
    let system = System::new_all();
    let processors = system.cpus().len();
    let memory_bound = (system.available_memory() / (2 * 1024 * 1024 * 1024)) as usize;
    std::cmp::max(1, std::cmp::min(processors, memory_bound))
}

fn run_build_steps(project: &Project) -> Result<()> {
    let steps = match &project.build_steps {
        Some(steps) => steps,
        None => return Ok(()),
    };

    let jobs = parallel_jobs();
    for step in steps {
        color_println!(BLUE, "Running build step: {}", step);
        let status = Command::new("bash")
            .arg("-c")
            .arg(step)
            .env("PRESWEEP_JOBS", jobs.to_string())
            .spawn()?
            .wait()?;
        if !status.success() {
            return Err(SweepError::FailedOperation("Build step failed"));
        }
    }
    Ok(())
}

fn build(project: &Project, base_directory: &Path) -> Result<()> {
    let mut sanitizer = Sanitizer::new();
    sanitizer.configure(project);
    sanitizer.sanitize(base_directory)?;
    run_build_steps(project)?;
    color_println!(
        GREEN,
        "Built project '{}' at {}.",
        project.name,
        chrono::Local::now().format("%H:%M:%S")
    );
    Ok(())
}

fn clean(project: &Project, base_directory: &Path) -> Result<()> {
    let mut sanitizer = Sanitizer::new();
    sanitizer.configure(project);
    sanitizer.sanitize(base_directory)
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Init { name } => init(&name),
        Commands::Build => {
            let base_directory = std::env::current_dir()?;
            let project = Project::load("presweep.json")?;
            build(&project, &base_directory)
        }
        Commands::Clean => {
            let base_directory = std::env::current_dir()?;
            let project = Project::load("presweep.json")?;
            clean(&project, &base_directory)
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            color_eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}
