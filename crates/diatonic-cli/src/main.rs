//! Diatonic CLI - terminal music-theory reference
//!
//! Prints diatonic scales, their triads and common progressions for any of
//! the twelve roots, as colored text or JSON.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;

use cli_args::{Cli, Commands};
use diatonic_cli::{commands, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Show {
            root,
            selection,
            json,
        } => commands::show::run(&selection.into_args(root), json),
        Commands::Notes { flats, json } => commands::notes::run(flats, json),
        Commands::Table { flats, compact } => commands::table::run(flats, compact),
        Commands::Roman { value } => commands::roman::run(&value),
        Commands::Progression {
            root,
            degrees,
            selection,
            json,
        } => commands::progression::run(&selection.into_args(Some(root)), &degrees, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diatonic_theory::Mode;

    #[test]
    fn test_cli_parses_show() {
        let cli = Cli::try_parse_from(["diatonic", "show", "Eb", "--mode", "minor", "--flats"])
            .unwrap();
        match cli.command {
            Commands::Show {
                root,
                selection,
                json,
            } => {
                assert_eq!(root.as_deref(), Some("Eb"));
                assert_eq!(selection.mode, Some(Mode::Minor));
                assert!(selection.flats);
                assert!(!json);
                let args = selection.into_args(root);
                assert_eq!(args.use_flats, Some(true));
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn test_cli_show_defaults() {
        let cli = Cli::try_parse_from(["diatonic", "show"]).unwrap();
        match cli.command {
            Commands::Show {
                root, selection, ..
            } => {
                let args = selection.into_args(root);
                assert_eq!(args.root, None);
                assert_eq!(args.mode, None);
                assert_eq!(args.use_flats, None);
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn test_cli_sharps_flag() {
        let cli = Cli::try_parse_from(["diatonic", "show", "C", "--sharps"]).unwrap();
        match cli.command {
            Commands::Show {
                root, selection, ..
            } => assert_eq!(selection.into_args(root).use_flats, Some(false)),
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn test_cli_rejects_flats_with_sharps() {
        assert!(Cli::try_parse_from(["diatonic", "show", "--flats", "--sharps"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["diatonic", "show", "--mode", "dorian"]).is_err());
    }

    #[test]
    fn test_cli_parses_progression_degrees() {
        let cli = Cli::try_parse_from(["diatonic", "progression", "G", "2,5,1", "--json"]).unwrap();
        match cli.command {
            Commands::Progression {
                root,
                degrees,
                json,
                ..
            } => {
                assert_eq!(root, "G");
                assert_eq!(degrees, vec![2, 5, 1]);
                assert!(json);
            }
            _ => panic!("expected progression command"),
        }
    }

    #[test]
    fn test_cli_progression_requires_degrees() {
        assert!(Cli::try_parse_from(["diatonic", "progression", "G"]).is_err());
    }

    #[test]
    fn test_cli_roman_accepts_negative() {
        let cli = Cli::try_parse_from(["diatonic", "roman", "-4"]).unwrap();
        match cli.command {
            Commands::Roman { value } => assert_eq!(value, "-4"),
            _ => panic!("expected roman command"),
        }
    }

    #[test]
    fn test_cli_global_verbose() {
        let cli = Cli::try_parse_from(["diatonic", "notes", "-v", "--flats"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Notes {
                flats: true,
                json: false
            }
        ));
    }
}
