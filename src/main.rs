use std::time::Duration;

use clap::Parser;
use pov::api::client::ApiClient;
use pov::app::App;
use pov::cli::Cli;
use pov::error::{AppError, Result};
use pov::types::{Category, SearchRequest};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        pov::observability::init_tracing(path);
    }

    // Direct-launch request from CLI flags
    let initial_request = match (&cli.query, &cli.category) {
        (Some(query), Some(category)) => {
            let category = Category::parse(category)
                .ok_or_else(|| AppError::unknown_category(category.clone()))?;
            let request = SearchRequest::new(query, category)
                .ok_or_else(|| AppError::config("search term is empty"))?;
            Some(request)
        }
        _ => None,
    };

    let api = ApiClient::new(&cli.base_url, Duration::from_secs(cli.timeout_secs))?;

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    // Run the app
    let mut terminal = ratatui::init();
    let mut app = App::new(api, initial_request);
    let result = app.run(&mut terminal).await;

    // Restore terminal
    ratatui::restore();

    result
}
