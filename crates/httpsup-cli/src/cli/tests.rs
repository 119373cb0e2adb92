use super::*;

#[test]
fn parses_check_with_multiple_urls() {
    let cli =
        Cli::try_parse_from(["httpsup", "check", "http://a.example", "http://b.example"]).unwrap();
    match cli.command {
        CliCommand::Check { urls } => {
            assert_eq!(urls, vec!["http://a.example", "http://b.example"]);
        }
        other => panic!("wrong command: {:?}", other),
    }
}

#[test]
fn check_requires_at_least_one_url() {
    assert!(Cli::try_parse_from(["httpsup", "check"]).is_err());
}

#[test]
fn parses_fetch() {
    let cli = Cli::try_parse_from(["httpsup", "fetch", "http://example.com"]).unwrap();
    match cli.command {
        CliCommand::Fetch { url } => assert_eq!(url, "http://example.com"),
        other => panic!("wrong command: {:?}", other),
    }
}

#[test]
fn rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["httpsup", "upload", "x"]).is_err());
}
