use openai_wrapper::config::Config;
use openai_wrapper::{ChatRequest, ImageRequest, ImageSize, Message, OpenAIClient, ResponseFormat};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Send chat completion and image generation requests to an OpenAI-compatible API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// API key (defaults to OPENAI_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Base URL of the API
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a question and print the assistant's answer
    Chat {
        /// User message
        prompt: String,

        /// Optional system message sent before the prompt
        #[arg(long, short = 's')]
        system: Option<String>,

        #[arg(long, short = 'm', default_value = openai_wrapper::llm::DEFAULT_CHAT_MODEL)]
        model: String,

        #[arg(long, short = 't', default_value_t = openai_wrapper::llm::DEFAULT_TEMPERATURE)]
        temperature: f64,

        #[arg(long)]
        max_tokens: Option<u32>,
    },

    /// Generate images and print their URLs
    Image {
        /// Image description
        prompt: String,

        /// WIDTHxHEIGHT, e.g. 256x256, 512x512 or 1024x1024
        #[arg(long, default_value = "1024x1024")]
        size: ImageSize,

        /// Number of images
        #[arg(short = 'n', default_value_t = 1)]
        n: u32,

        /// url or b64_json
        #[arg(long, default_value = "url")]
        response_format: ResponseFormat,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging with RUST_LOG environment variable
    // Default to "warn" if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = Config::from_env(args.api_key)?;
    if let Some(url) = args.base_url {
        config = config.with_base_url(url);
    }
    info!("Using API at {}", config.base_url());
    let client = OpenAIClient::with_config(config)?;

    match args.command {
        Commands::Chat {
            prompt,
            system,
            model,
            temperature,
            max_tokens,
        } => {
            let mut messages = Vec::new();
            if let Some(system) = system {
                messages.push(Message::system(system));
            }
            messages.push(Message::user(prompt));

            let mut request = ChatRequest::new(messages)
                .model(model)
                .temperature(temperature);
            if let Some(max_tokens) = max_tokens {
                request = request.max_tokens(max_tokens);
            }

            chat_command(&client, &request)
        }
        Commands::Image {
            prompt,
            size,
            n,
            response_format,
        } => {
            let request = ImageRequest::new(prompt)
                .size(size)
                .n(n)
                .response_format(response_format);

            image_command(&client, &request)
        }
    }
}

fn chat_command(client: &OpenAIClient, request: &ChatRequest) -> Result<()> {
    let response = client.chat_completion(request)?;

    let content = response["choices"][0]["message"]["content"]
        .as_str()
        .context("Response contained no message content")?;

    println!("{}", content);
    Ok(())
}

fn image_command(client: &OpenAIClient, request: &ImageRequest) -> Result<()> {
    let response = client.create_image(request)?;

    let images = response["data"]
        .as_array()
        .context("Response contained no image data")?;

    for image in images {
        print_image(image, request.response_format)?;
    }
    Ok(())
}

fn print_image(image: &Value, format: ResponseFormat) -> Result<()> {
    match format {
        ResponseFormat::Url => {
            let url = image["url"].as_str().context("Image entry has no url")?;
            println!("{}", url);
        }
        ResponseFormat::B64Json => {
            let data = image["b64_json"]
                .as_str()
                .context("Image entry has no b64_json")?;
            println!("<base64 image, {} bytes>", data.len());
        }
    }
    Ok(())
}
