//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_fetch_defaults() {
    match parse(&["dexfetch", "fetch"]) {
        CliCommand::Fetch {
            pokemon,
            output_dir,
            no_sprites,
            base_url,
        } => {
            assert!(pokemon.is_none());
            assert!(output_dir.is_none());
            assert!(!no_sprites);
            assert!(base_url.is_none());
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_by_name() {
    match parse(&["dexfetch", "fetch", "pikachu"]) {
        CliCommand::Fetch { pokemon, .. } => assert_eq!(pokemon.as_deref(), Some("pikachu")),
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_all_flags() {
    match parse(&[
        "dexfetch",
        "fetch",
        "25",
        "--output-dir",
        "/tmp/sprites",
        "--no-sprites",
        "--base-url",
        "http://127.0.0.1:8080/api/pokemon/",
    ]) {
        CliCommand::Fetch {
            pokemon,
            output_dir,
            no_sprites,
            base_url,
        } => {
            assert_eq!(pokemon.as_deref(), Some("25"));
            assert_eq!(output_dir.as_deref(), Some(Path::new("/tmp/sprites")));
            assert!(no_sprites);
            assert_eq!(base_url.as_deref(), Some("http://127.0.0.1:8080/api/pokemon/"));
        }
        _ => panic!("expected Fetch with flags"),
    }
}

#[test]
fn cli_parse_config() {
    match parse(&["dexfetch", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["dexfetch", "add", "x"]).is_err());
}
