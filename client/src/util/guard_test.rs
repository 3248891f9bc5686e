use super::*;

#[test]
fn authenticated_probe_proceeds() {
    assert_eq!(guard_outcome(SessionProbe::Authenticated), GuardOutcome::Proceed);
}

#[test]
fn rejected_statuses_redirect_to_login() {
    for status in [401, 403, 500, 503] {
        assert_eq!(
            guard_outcome(SessionProbe::Rejected(status)),
            GuardOutcome::RedirectToLogin,
            "expected redirect for status {status}"
        );
    }
}

#[test]
fn unreachable_server_redirects_to_login() {
    assert_eq!(guard_outcome(SessionProbe::Unreachable), GuardOutcome::RedirectToLogin);
}

#[test]
fn rejection_and_transport_failure_are_indistinguishable() {
    assert_eq!(
        guard_outcome(SessionProbe::Rejected(401)),
        guard_outcome(SessionProbe::Unreachable)
    );
}
