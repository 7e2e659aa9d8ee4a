use std::io;

use postmark::{CreateDomainRequest, PostmarkClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let account_token = std::env::var("POSTMARK_ACCOUNT_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "POSTMARK_ACCOUNT_TOKEN environment variable is required",
        )
    })?;

    let client = PostmarkClient::new("", account_token);
    let request = CreateDomainRequest {
        name: "example.com".to_owned(),
        return_path_domain: None,
    };
    let domain = client.create_domain(&request).await?;

    println!("id: {}, name: {}", domain.domain.id, domain.domain.name);
    println!("SPF: {:?} {:?}", domain.spf_host, domain.spf_text_value);
    println!("DKIM: {:?} {:?}", domain.dkim_host, domain.dkim_text_value);
    println!(
        "return path: {:?} -> {:?}",
        domain.return_path_domain, domain.return_path_domain_cname_value
    );

    Ok(())
}
