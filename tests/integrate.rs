use assert_cmd::Command;

fn executable() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    // never reach the real service from tests
    cmd.env("LEDGER_POSTAL_API_URL", "http://127.0.0.1:9/ws")
        .env("LEDGER_HTTP_TIMEOUT_SECS", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(input: &str) -> String {
    let out = executable()
        .write_stdin(input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    String::from_utf8(out).unwrap()
}

#[test]
fn exit_option_ends_session() {
    let out = stdout_of("0\n");
    assert_eq!(out.matches("==================== MENU").count(), 1);
}

#[test]
fn end_of_input_ends_session() {
    let out = stdout_of("5\n");
    assert!(out.contains("No accounts registered."));
}

#[test]
fn unknown_customer_is_reported() {
    let out = stdout_of("1\n11144477735\n2\n111.444.777-36\n3\n00000000000\n0\n");
    assert!(out.contains("Customer not found"));
    assert_eq!(
        out.matches("The national ID provided is not valid").count(),
        2
    );
}

#[test]
fn unreachable_address_service_does_not_stop_session() {
    let out = stdout_of("6\n11144477735\nAna\n17-05-1990\n01001-000\n4\n11144477735\n0\n");
    assert!(out.contains("Could not fetch address"));
    // customer was not created
    assert!(out.contains("Customer not found"));
}

#[test]
fn invalid_configuration_fails() {
    executable()
        .env("LEDGER_WITHDRAWAL_LIMIT", "-1")
        .write_stdin("0\n")
        .assert()
        .failure();
}
