use clap::Parser;
use fwt::cli::{Cli, Commands};
use miette::Result;

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
        Commands::Init(args) => fwt::cli::commands::init::run(args),
        Commands::New(args) => fwt::cli::commands::new::run(args, &global),
        Commands::Validate(args) => fwt::cli::commands::validate::run(args, &global),
        Commands::List(args) => fwt::cli::commands::list::run(args, &global),
        Commands::Show(args) => fwt::cli::commands::show::run(args, &global),
        Commands::Drafts(args) => fwt::cli::commands::drafts::run(args, &global),
        Commands::Categories(args) => fwt::cli::commands::categories::run(args, &global),
        Commands::Completions(args) => fwt::cli::commands::completions::run(args),
    }
}
