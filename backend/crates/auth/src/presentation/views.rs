//! Login and registration pages

use platform::html::layout;

const GOOGLE_BUTTON: &str = r#"
        <div class="form-group">
            <a class="btn btn-light" href="/auth/google" role="button">Sign In with Google</a>
        </div>"#;

fn credentials_form(action: &str, submit_label: &str) -> String {
    format!(
        r#"
        <form action="{action}" method="POST">
            <div class="form-group">
                <label for="username">Email</label>
                <input type="email" id="username" name="username" autocomplete="username" required>
            </div>
            <div class="form-group">
                <label for="password">Password</label>
                <input type="password" id="password" name="password" required>
            </div>
            <button type="submit" class="btn">{submit_label}</button>
        </form>"#
    )
}

pub fn login_page() -> String {
    let body = format!(
        "        <h1>Login</h1>{}{}",
        credentials_form("/login", "Login"),
        GOOGLE_BUTTON
    );
    layout("Login", &body)
}

pub fn register_page() -> String {
    let body = format!(
        "        <h1>Register</h1>{}{}",
        credentials_form("/register", "Register"),
        GOOGLE_BUTTON
    );
    layout("Register", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_page_posts_to_login() {
        let page = login_page();
        assert!(page.contains(r#"action="/login""#));
        assert!(page.contains(r#"name="username""#));
        assert!(page.contains(r#"name="password""#));
        assert!(page.contains(r#"href="/auth/google""#));
    }

    #[test]
    fn test_register_page_posts_to_register() {
        let page = register_page();
        assert!(page.contains(r#"action="/register""#));
        assert!(page.contains("<title>Register - Secrets</title>"));
    }
}
