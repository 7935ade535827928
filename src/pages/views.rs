use axum::response::Html;

pub fn home() -> Html<&'static str> {
    Html("<h1>LanceHub</h1><p>Find work. Hire talent.</p>")
}

pub fn login() -> Html<&'static str> {
    Html("<h1>Sign in</h1><p>Enter your credentials to continue.</p>")
}

pub fn register() -> Html<&'static str> {
    Html("<h1>Create an account</h1>")
}

pub fn admin_dashboard() -> Html<&'static str> {
    Html("<h1>Admin dashboard</h1>")
}

pub fn client_dashboard() -> Html<&'static str> {
    Html("<h1>Client dashboard</h1>")
}

pub fn freelancer_dashboard() -> Html<&'static str> {
    Html("<h1>Freelancer dashboard</h1>")
}

/// Shown instead of protected content while the account awaits
/// verification. Doubles as the catch-all "no page" view.
pub fn pending_verification() -> Html<&'static str> {
    Html("<h1>Nothing to see here</h1><p>Your account is awaiting verification.</p>")
}
