use clap::Parser;
use passkeep::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { ref path, ref name } => {
            passkeep::cli::commands::init::execute(path, name.as_deref())
        }
        Commands::Add {
            ref website,
            ref username,
            ref password,
            ref totp,
        } => passkeep::cli::commands::add::execute(
            &cli,
            website,
            username,
            password.as_deref(),
            totp,
        ),
        Commands::List => passkeep::cli::commands::list::execute(&cli),
        Commands::Show { id } => passkeep::cli::commands::show::execute(&cli, id),
        Commands::Edit {
            id,
            ref website,
            ref username,
            ref password,
            ref totp,
        } => passkeep::cli::commands::edit::execute(
            &cli,
            id,
            website.as_deref(),
            username.as_deref(),
            password.as_deref(),
            totp.as_deref(),
        ),
        Commands::Remove { id, force } => passkeep::cli::commands::remove::execute(&cli, id, force),
        Commands::Favorite { id } => passkeep::cli::commands::favorite::execute(&cli, id),
        Commands::Totp { id } => passkeep::cli::commands::totp_cmd::execute(&cli, id),
        Commands::Rename { ref name } => passkeep::cli::commands::rename::execute(&cli, name),
        Commands::Rekey => passkeep::cli::commands::rekey::execute(&cli),
        Commands::Export {
            ref format,
            ref output,
        } => passkeep::cli::commands::export::execute(&cli, format, output.as_deref()),
        Commands::Recent { clear } => passkeep::cli::commands::recent::execute(clear),
        Commands::Completions { ref shell } => passkeep::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        passkeep::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
