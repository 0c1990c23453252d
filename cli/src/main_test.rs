use clap::CommandFactory;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("ats").chain(args.iter().copied())).unwrap()
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn login_takes_email_and_password() {
    let cli = parse(&["--base-url", "http://h/api", "login", "--email", "a@b.com", "--password", "pw"]);
    assert_eq!(cli.base_url, "http://h/api");
    assert!(matches!(cli.command, Command::Login { ref email, ref password } if email == "a@b.com" && password == "pw"));
}

#[test]
fn offer_answers_map_to_statuses() {
    let cli = parse(&["offers", "respond", "42", "accept"]);
    let Command::Offers(OffersCommand { command: OffersSubcommand::Respond { offer_id, answer } }) = cli.command else {
        panic!("expected offers respond");
    };
    assert_eq!(offer_id, "42");
    assert_eq!(OfferStatus::from(answer), OfferStatus::Accepted);
    assert_eq!(OfferStatus::from(OfferAnswer::Decline), OfferStatus::Declined);
}

#[test]
fn employee_roles_parse_case_insensitively() {
    let cli = parse(&["employees", "set-role", "7", "HR"]);
    let Command::Employees(EmployeesCommand { command: EmployeesSubcommand::SetRole { role, .. } }) = cli.command
    else {
        panic!("expected employees set-role");
    };
    assert_eq!(role, UserType::Employee);
}

#[test]
fn upload_defaults_to_resume() {
    let cli = parse(&["documents", "upload", "cv.pdf"]);
    let Command::Documents(DocumentsCommand { command: DocumentsSubcommand::Upload { document_type, path } }) =
        cli.command
    else {
        panic!("expected documents upload");
    };
    assert_eq!(document_type, "Resume");
    assert_eq!(path, PathBuf::from("cv.pdf"));
}

#[test]
fn global_json_flag_works_after_subcommand() {
    assert!(parse(&["whoami", "--json"]).json);
}
