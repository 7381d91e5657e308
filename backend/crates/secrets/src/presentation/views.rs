//! Secrets and submit pages

use platform::html::{escape, layout};

use crate::domain::value_object::SECRET_MAX_LENGTH;

pub fn secrets_page(secrets: &[String]) -> String {
    let items: String = secrets
        .iter()
        .map(|secret| format!("        <p class=\"secret\">{}</p>\n", escape(secret)))
        .collect();

    let body = format!(
        r#"        <h1>You've Discovered My Secret!</h1>
{items}        <hr>
        <a class="btn btn-light" href="/logout" role="button">Log Out</a>
        <a class="btn" href="/submit" role="button">Submit a Secret</a>"#
    );

    layout("Secrets", &body)
}

pub fn submit_page() -> String {
    let body = format!(
        r#"        <h1>Secrets</h1>
        <p>Don't keep your secrets, share them anonymously!</p>
        <form action="/submit" method="POST">
            <div class="form-group">
                <input type="text" name="secret" placeholder="What's your secret?" maxlength="{SECRET_MAX_LENGTH}" required>
            </div>
            <button type="submit" class="btn">Submit</button>
        </form>"#
    );

    layout("Submit", &body)
}
