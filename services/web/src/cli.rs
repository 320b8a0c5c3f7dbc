use crate::commands::{run_check, run_routine, CheckArgs, RoutineArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use skinsync::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "skinsync",
    about = "Personalized skincare routines and comedogenic ingredient checks",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service and web form (default command)
    Serve(ServeArgs),
    /// Generate a morning and evening routine for a skin profile
    Routine(RoutineArgs),
    /// Check a comma-separated ingredient list against the comedogenic table
    Check(CheckArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Routine(args) => run_routine(args),
        Command::Check(args) => run_check(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinsync::routine::{Allergy, SkinConcern, SkinType};

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["skinsync"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn routine_arguments_accept_labels_and_ids() {
        let cli = Cli::try_parse_from([
            "skinsync",
            "routine",
            "--skin-type",
            "Oily",
            "--concern",
            "acne",
            "--allergy",
            "Essential Oils",
            "--current-step",
            "SPF/Sunscreen",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Routine(args)) => {
                let profile = args.profile();
                assert_eq!(profile.skin_type, SkinType::Oily);
                assert!(profile.has_concern(SkinConcern::Acne));
                assert!(profile.is_allergic_to(Allergy::EssentialOils));
                assert_eq!(profile.current_routine.len(), 1);
            }
            other => panic!("expected routine command, got {other:?}"),
        }
    }

    #[test]
    fn unknown_skin_type_is_rejected() {
        let err = Cli::try_parse_from(["skinsync", "routine", "--skin-type", "scaly"])
            .expect_err("unknown skin type");
        assert!(err.to_string().contains("scaly"));
    }
}
