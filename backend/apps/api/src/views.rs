//! Landing page

use platform::html::layout;

pub fn home_page() -> String {
    let body = r#"        <h1>Secrets</h1>
        <p>Don't keep your secrets, share them anonymously!</p>
        <hr>
        <a class="btn btn-light" href="/register" role="button">Register</a>
        <a class="btn" href="/login" role="button">Login</a>"#;

    layout("Home", body)
}
