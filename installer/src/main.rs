//! ToolGit installer CLI entrypoint.
//!
//! Copies `bin/git_helpers.sh` into `~/.local/lib/ToolGit` and writes a
//! wrapper for each `gh_*` function into `~/.local/bin`. Any failure prints
//! `❌ Error: <cause>` and exits with status 1.

use clap::Parser;
use std::io::Write;
use toolgit_installer::cli::Cli;
use toolgit_installer::dirs::{BaseDirs, SystemBaseDirs};
use toolgit_installer::error::Result;
use toolgit_installer::host::HostFamily;
use toolgit_installer::install::{InstallReport, Installer};
use toolgit_installer::layout::InstallLayout;
use toolgit_installer::output::{error_message, write_line};

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    let run_result = run(&cli, &SystemBaseDirs, &mut stdout);
    let exit_code = exit_code_for_run_result(run_result, &mut stdout);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, dirs: &dyn BaseDirs, stdout: &mut dyn Write) -> Result<InstallReport> {
    let layout = InstallLayout::resolve(dirs, cli.prefix.as_deref(), cli.source.as_deref())?;
    let installer = Installer::new(layout, HostFamily::current()).quiet(cli.quiet);

    if cli.dry_run {
        return installer.plan(stdout);
    }
    installer.run(stdout)
}

fn exit_code_for_run_result(result: Result<InstallReport>, stdout: &mut dyn Write) -> i32 {
    match result {
        Ok(_) => 0,
        Err(err) => {
            write_line(stdout, error_message(&err));
            1
        }
    }
}
