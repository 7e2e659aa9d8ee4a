use std::io;

use postmark::{PostmarkClient, Server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let account_token = std::env::var("POSTMARK_ACCOUNT_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "POSTMARK_ACCOUNT_TOKEN environment variable is required",
        )
    })?;

    let client = PostmarkClient::new("", account_token);
    let server = Server {
        name: "Staging".to_owned(),
        color: "Red".to_owned(),
        ..Default::default()
    };
    let server = client.create_server(&server).await?;

    println!(
        "id: {}, name: {}, color: {}, track_links: {:?}",
        server.id, server.name, server.color, server.track_links
    );

    Ok(())
}
