//! Shared auth UI flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login, signup and logout screens run the same shape of flow: validate
//! locally, make at most one `SessionService` call, then report a single
//! notice and an optional redirect. The flows are plain async functions over
//! the trait so components stay thin and the rules are testable.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::session::SessionService;
use crate::net::types::User;
use crate::state::toast::Notice;
use crate::util::routes::AppRoute;

/// Description used when the service fails without a message.
pub const GENERIC_FAILURE: &str = "Something went wrong";

const WELCOME: &str = "Welcome to BereansTechnology Dashboard";

/// Result of one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthOutcome {
    /// The one notice to show for this submission.
    pub notice: Notice,
    /// Signed-in user on success.
    pub user: Option<User>,
    /// Where to navigate afterwards, if anywhere.
    pub redirect: Option<&'static str>,
}

impl AuthOutcome {
    fn rejected(notice: Notice) -> Self {
        Self { notice, user: None, redirect: None }
    }

    fn signed_in(notice: Notice, user: User) -> Self {
        Self { notice, user: Some(user), redirect: Some(AppRoute::Overview.path()) }
    }

    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.user.is_some()
    }
}

/// Signup form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Which screen started a federated sign-in; only the wording differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FederatedIntent {
    SignIn,
    SignUp,
}

/// What the user chose in the logout confirmation dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutChoice {
    Confirm,
    Dismiss,
}

fn failure_description(message: &str) -> String {
    if message.trim().is_empty() { GENERIC_FAILURE.to_owned() } else { message.to_owned() }
}

fn fill_all_fields() -> Notice {
    Notice::error("Error", "Please fill in all fields")
}

/// Login preconditions: both fields present.
///
/// # Errors
///
/// Returns the error notice to show when a field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<(), Notice> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(fill_all_fields());
    }
    Ok(())
}

/// Signup preconditions. Password mismatch is reported before blank fields.
///
/// # Errors
///
/// Returns the error notice to show when validation fails.
pub fn validate_signup(form: &SignupForm) -> Result<(), Notice> {
    if form.password != form.confirm_password {
        return Err(Notice::error("Error", "Passwords do not match"));
    }
    if form.name.trim().is_empty() || form.email.trim().is_empty() || form.password.is_empty() {
        return Err(fill_all_fields());
    }
    Ok(())
}

/// Email + password sign-in. Calls the service only if validation passes.
pub async fn submit_login<S: SessionService>(service: &S, email: &str, password: &str) -> AuthOutcome {
    if let Err(notice) = validate_login(email, password) {
        return AuthOutcome::rejected(notice);
    }
    match service.sign_in(email.trim(), password).await {
        Ok(user) => AuthOutcome::signed_in(Notice::success("Login Successful", WELCOME), user),
        Err(message) => AuthOutcome::rejected(Notice::error("Login Failed", failure_description(&message))),
    }
}

/// Account creation. Calls the service only if validation passes.
pub async fn submit_signup<S: SessionService>(service: &S, form: &SignupForm) -> AuthOutcome {
    if let Err(notice) = validate_signup(form) {
        return AuthOutcome::rejected(notice);
    }
    let name = form.name.trim();
    match service.sign_up(name, form.email.trim(), &form.password).await {
        Ok(user) => AuthOutcome::signed_in(Notice::success("Account Created", format!("Welcome, {name}!")), user),
        Err(message) => AuthOutcome::rejected(Notice::error("Signup Failed", failure_description(&message))),
    }
}

/// Federated popup sign-in, from either auth screen.
pub async fn submit_federated<S: SessionService>(service: &S, intent: FederatedIntent) -> AuthOutcome {
    let result = service.sign_in_federated().await;
    match (intent, result) {
        (FederatedIntent::SignIn, Ok(user)) => {
            AuthOutcome::signed_in(Notice::success("Login Successful", WELCOME), user)
        }
        (FederatedIntent::SignUp, Ok(user)) => {
            let name = if user.name.trim().is_empty() { "User".to_owned() } else { user.name.clone() };
            AuthOutcome::signed_in(Notice::success("Signup Successful", format!("Welcome, {name}!")), user)
        }
        (FederatedIntent::SignIn, Err(message)) => {
            AuthOutcome::rejected(Notice::error("Google Login Failed", failure_description(&message)))
        }
        (FederatedIntent::SignUp, Err(message)) => {
            AuthOutcome::rejected(Notice::error("Google Signup Failed", failure_description(&message)))
        }
    }
}

/// Resolve the logout dialog. Confirming ends the session and always lands
/// on the login page, even if sign-out fails; dismissing does nothing.
///
/// Returns the navigation target and, on a failed sign-out, its message.
pub async fn resolve_logout<S: SessionService>(
    service: &S,
    choice: LogoutChoice,
) -> (Option<&'static str>, Option<String>) {
    match choice {
        LogoutChoice::Dismiss => (None, None),
        LogoutChoice::Confirm => {
            let failure = service.sign_out().await.err();
            (Some(AppRoute::Login.path()), failure)
        }
    }
}
