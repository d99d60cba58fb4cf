use clap::Parser;
use miette::Result;
use vsm::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Takt(args) => vsm::cli::commands::takt::run(args, &global),
        Commands::Inventory(args) => vsm::cli::commands::inventory::run(args, &global),
        Commands::Capacity(args) => vsm::cli::commands::capacity::run(args, &global),
        Commands::Kanban(args) => vsm::cli::commands::kanban::run(args, &global),
        Commands::Formulas(cmd) => vsm::cli::commands::formulas::run(cmd, &global),
        Commands::Scenario(cmd) => vsm::cli::commands::scenario::run(cmd, &global),
        Commands::Completions(args) => vsm::cli::commands::completions::run(args),
    }
}
