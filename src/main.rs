use std::io::{self, Write};

use ubuntu_image_fetcher::{FetchError, FetchOutcome, Fetcher};

fn main() {
    println!("Welcome to the Ubuntu Image Fetcher");
    println!("A tool for mindfully collecting images from the web\n");

    print!("Please enter image URL(s), separated by commas: ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        line.clear();
    }

    let fetcher = Fetcher::new();

    for url in line.split(',').map(str::trim).filter(|url| !url.is_empty()) {
        report(url, fetcher.fetch(url));
    }

    println!("\nConnection strengthened. Community enriched.");
}

fn report(url: &str, result: Result<FetchOutcome, FetchError>) {
    match result {
        Ok(FetchOutcome::Saved { filename, path }) => {
            println!("✓ Successfully fetched: {filename}");
            println!("✓ Image saved to {}", path.display());
        }

        Ok(FetchOutcome::AlreadyExists { filename }) => {
            println!("⚠ Image already exists: {filename}");
        }

        Err(err) if err.is_connection() => {
            println!("✗ Connection error for {url}: {err}");
        }

        Err(err) => {
            println!("✗ An error occurred for {url}: {err}");
        }
    }
}
