//! Resumes a download into a local file.
//!
//! Usage: cargo run --example resume_download -- <url> <path> <total-size>
//!
//! Interrupt it and run it again: the second run continues from the bytes
//! already on disk.

use std::io::Write;
use resume_downloader::{open_file_destination, DownloadConfiguration, Downloader};
use tracing_subscriber::EnvFilter;

fn program_name(args: &[String]) -> &str {
    args.first().map_or("resume_download", String::as_str)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("usage: {} <url> <path> <total-size>", program_name(&args));
        std::process::exit(2);
    }
    let url = &args[1];
    let path = &args[2];
    let total_size: u64 = match args[3].parse() {
        Ok(size) => size,
        Err(e) => {
            eprintln!("invalid total size {}: {}", args[3], e);
            std::process::exit(2);
        }
    };

    let config = DownloadConfiguration::new()
        .set_user_agent("resume-downloader-demo/0.1")
        .build()
        .expect("Invalid download configuration");
    let downloader = Downloader::new(config).expect("Cannot build HTTP client");

    let mut file = open_file_destination(path).await.expect("Cannot open destination file");

    let mut on_progress = |total: u64, downloaded: u64| {
        let percent = if total == 0 { 100.0 } else { downloaded as f64 / total as f64 * 100.0 };
        print!("\rDownloading: {:.1}% ({} / {} bytes)", percent.min(100.0), downloaded, total);
        let _ = std::io::stdout().flush();
    };

    match downloader.download(url, Some(&mut file), total_size, Some(&mut on_progress)).await {
        Ok(status) => println!("\nDownload finished ({})", status),
        Err(e) => {
            eprintln!("\nDownload failed: {}", e);
            std::process::exit(1);
        }
    }
}
