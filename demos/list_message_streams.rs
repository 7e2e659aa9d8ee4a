use std::io;
use std::time::Duration;

use postmark::{MessageStreamTypeFilter, PostmarkClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let server_token = std::env::var("POSTMARK_SERVER_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "POSTMARK_SERVER_TOKEN environment variable is required",
        )
    })?;

    let client = PostmarkClient::builder(server_token, "")
        .timeout(Duration::from_secs(10))
        .build()?;
    let streams = client
        .list_message_streams(MessageStreamTypeFilter::All, false)
        .await?;

    for stream in streams {
        println!(
            "{} ({:?}) archived_at: {:?}",
            stream.id, stream.message_stream_type, stream.archived_at
        );
    }

    Ok(())
}
