use postgen_client::http_handler::http_response::generate_post::GeneratePostResponse;
use postgen_client::{ClientConfig, HTTPClient, error, generate_linkedin_post, health_check, info, warn};
use std::{env, process::ExitCode};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let client = match HTTPClient::new(ClientConfig::from_env()) {
        Ok(client) => client,
        Err(err) => {
            error!("Could not build HTTP client: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!("Using backend at {}", client.url());

    match health_check(&client).await {
        Ok(resp) => match resp.parse() {
            Ok(health) if health.is_healthy() => info!("Backend is healthy"),
            Ok(health) => warn!("Backend reports status {}", health.status),
            Err(_) => warn!("Unexpected health body: {}", resp.text()),
        },
        Err(_) => return ExitCode::FAILURE,
    }

    let Some(topic) = env::args().nth(1) else {
        warn!("No topic given, nothing to generate");
        return ExitCode::SUCCESS;
    };

    match generate_linkedin_post(&client, &topic).await {
        Ok(resp) => {
            match resp.parse() {
                Ok(post) => print_post(&post),
                Err(_) => println!("{}", resp.text()),
            }
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    }
}

fn print_post(post: &GeneratePostResponse) {
    println!("{}\n", post.linkedin_post);
    for source in &post.news_sources {
        println!("  source: {source}");
    }
    if let Some(image) = &post.image_suggestion {
        println!("  image:  {image}");
    }
    info!("Post on '{}' generated at {}", post.topic, post.generated_at);
}
