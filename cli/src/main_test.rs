use super::*;
use clap::CommandFactory;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn list_path_defaults() {
    assert_eq!(list_path("all", "", "risk").unwrap(), "/api/cases?status=all&sort=risk");
}

#[test]
fn list_path_encodes_query() {
    assert_eq!(
        list_path("pending", "SQ *JOES", "amount").unwrap(),
        "/api/cases?status=pending&sort=amount&q=SQ%20%2AJOES"
    );
}

#[test]
fn list_path_rejects_unknown_sort() {
    assert!(matches!(
        list_path("all", "", "priority"),
        Err(CliError::InvalidArgument(CaseError::UnknownSortKey(_)))
    ));
}

#[test]
fn endpoint_trims_trailing_slash() {
    let ctx = CliContext { base_url: "http://localhost:3000/".to_owned() };
    assert_eq!(endpoint(&ctx, "/healthz"), "http://localhost:3000/healthz");
}

#[test]
fn parses_decide_subcommand() {
    let cli = Cli::try_parse_from([
        "dispute-cli",
        "cases",
        "decide",
        "DSP-2024-001235",
        "--action",
        "escalate",
    ])
    .unwrap();
    let Command::Cases(CasesCommand { command: CasesSubcommand::Decide { case_id, action, notes } }) = cli.command
    else {
        panic!("expected cases decide");
    };
    assert_eq!(case_id, "DSP-2024-001235");
    assert_eq!(action, "escalate");
    assert!(notes.is_empty());
}
