//! Command-line front end for the blog service.
//!
//! Drives the three API operations against either the live backend or the
//! canned mock, and renders every failure variant as a user-facing message.

use clap::{Parser, Subcommand};

use blog_core::{AddPostError, FetchPostError, FetchPostListError, Post, TransportError};
use blog_service::{BlogService, MockBlogService, RemoteBlogService};

#[derive(Parser)]
#[command(name = "blog-cli", about = "Demo client for the blog API")]
struct Cli {
    /// Base URL of the blog server.
    #[arg(long, default_value = "http://localhost:3000")]
    base_url: String,

    /// Use canned responses instead of a live server.
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and print the post list.
    List,
    /// Fetch and print one post.
    Read { id: u64 },
    /// Submit a new post and print the server's echo.
    Add { title: String, body: String },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let service: Box<dyn BlogService> = if cli.mock {
        Box::new(MockBlogService::default())
    } else {
        Box::new(RemoteBlogService::new(&cli.base_url))
    };

    let outcome = match cli.command {
        Command::List => match service.fetch_post_list().await {
            Ok(posts) => {
                for (id, post) in posts.iter().enumerate() {
                    println!("{id}: {}", post.title);
                }
                Ok(())
            }
            Err(error) => Err(list_failure_message(&error)),
        },
        Command::Read { id } => match service.fetch_post(id).await {
            Ok(post) => {
                print_post(&post);
                Ok(())
            }
            Err(error) => Err(fetch_failure_message(&error)),
        },
        Command::Add { title, body } => match service.add_post(Post { title, body }).await {
            Ok(post) => {
                println!("Added:");
                print_post(&post);
                Ok(())
            }
            Err(error) => Err(add_failure_message(&error)),
        },
    };

    if let Err(message) = outcome {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

fn print_post(post: &Post) {
    println!("{}", post.title);
    println!("{}", post.body);
}

fn transport_message(error: &TransportError) -> String {
    match error {
        TransportError::TimedOut => {
            "The network is taking too long. You may want to try later when you have a better connection.".to_string()
        }
        TransportError::CannotConnect => {
            "The server is down. Start it with `cargo run -p blog-server` and try again.".to_string()
        }
        TransportError::HostNotFound => {
            "That server doesn't seem to exist. Check the base URL.".to_string()
        }
        TransportError::Cancelled => "The request was cancelled by a newer one.".to_string(),
        other => format!("Something is wrong with the network: {other}."),
    }
}

fn fetch_failure_message(error: &FetchPostError) -> String {
    match error {
        FetchPostError::Transport(transport) => transport_message(transport),
        FetchPostError::MissingBody => "Server isn't responding properly. No data.".to_string(),
        FetchPostError::MalformedBody(bytes) => {
            format!("We couldn't make sense of the server data ({} bytes).", bytes.len())
        }
        FetchPostError::PostNotFound => "That post doesn't exist.".to_string(),
        FetchPostError::ServerError => {
            "The server isn't responding correctly at the moment. You may want to try again later.".to_string()
        }
        FetchPostError::BadRequest => "We made a bad request. Check the post id.".to_string(),
        FetchPostError::UnexpectedStatus(status) => {
            format!("Something is wrong with the server (HTTP {status}).")
        }
    }
}

fn list_failure_message(error: &FetchPostListError) -> String {
    match error {
        FetchPostListError::Transport(transport) => transport_message(transport),
        FetchPostListError::MissingBody => "Server isn't responding properly. No data.".to_string(),
        FetchPostListError::MalformedBody(bytes) => {
            format!("We couldn't make sense of the post list ({} bytes).", bytes.len())
        }
        FetchPostListError::ServerError => {
            "The server isn't responding correctly at the moment. You may want to try again later.".to_string()
        }
        FetchPostListError::UnexpectedStatus(status) => {
            format!("Something is wrong with the server (HTTP {status}).")
        }
    }
}

fn add_failure_message(error: &AddPostError) -> String {
    match error {
        AddPostError::Transport(transport) => transport_message(transport),
        AddPostError::Encode(detail) => format!("Couldn't encode the post: {detail}."),
        AddPostError::MissingBody => {
            "The server accepted the post but sent nothing back.".to_string()
        }
        AddPostError::MalformedBody(bytes) => {
            format!("We couldn't make sense of the server's echo ({} bytes).", bytes.len())
        }
        AddPostError::PostNotFound => "The write endpoint wasn't found.".to_string(),
        AddPostError::ServerError => {
            "The server isn't responding correctly at the moment. You may want to try again later.".to_string()
        }
        AddPostError::BadRequest => "The server rejected that post.".to_string(),
        AddPostError::UnexpectedStatus(status) => {
            format!("Something is wrong with the server (HTTP {status}).")
        }
    }
}
