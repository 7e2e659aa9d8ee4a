use std::io;

use postmark::{Email, PostmarkClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let server_token = std::env::var("POSTMARK_SERVER_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "POSTMARK_SERVER_TOKEN environment variable is required",
        )
    })?;
    let to = std::env::var("POSTMARK_TO").unwrap_or_else(|_| "tito@example.com".to_owned());

    let client = PostmarkClient::new(server_token, "");
    let email = Email {
        from: "no-reply@example.com".to_owned(),
        to,
        subject: "Reset your password".to_owned(),
        html_body: Some("<p>...</p>".to_owned()),
        text_body: Some("...".to_owned()),
        tag: Some("pw-reset".to_owned()),
        track_opens: true,
        ..Default::default()
    };

    let response = client.send_email(&email).await?;
    println!(
        "to: {}, message_id: {:?}, submitted_at: {:?}",
        response.to, response.message_id, response.submitted_at
    );

    Ok(())
}
