//! Command-line front end for the movie explorer client core.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use movie_explorer::adapters::{
    ApiClient, ApiClientConfig, FileSessionStore, HttpAccountApi, HttpMovieApi,
    HttpSubscriptionApi, ScriptedMovieSource, TracingNotifier,
};
use movie_explorer::application::{
    AccountService, ListingController, ListingView, SearchDebouncer, SessionContext,
    SubscriptionStatusProvider,
};
use movie_explorer::config::AppConfig;
use movie_explorer::domain::catalog::SortMode;
use movie_explorer::domain::forms::LoginForm;
use movie_explorer::domain::subscription::{CheckoutPlan, PlanType};
use movie_explorer::ports::{MovieQueryService, SessionStore};

#[derive(Parser)]
#[command(name = "movie-explorer")]
#[command(version)]
#[command(about = "Browse, search and subscribe to the movie catalogue", long_about = None)]
struct Cli {
    /// Use the built-in sample catalogue instead of the remote API
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List movies by genre, following pagination
    Browse {
        /// Genre to show (all genres when omitted)
        #[arg(long)]
        genre: Option<String>,
        /// top_rated or latest_by_year
        #[arg(long)]
        sort: Option<SortMode>,
        /// Maximum pages to load
        #[arg(long, default_value_t = 3)]
        pages: u32,
    },
    /// Search by title, typed one character at a time through the debouncer
    Search {
        query: String,
        /// Delay between simulated keystrokes in milliseconds
        #[arg(long, default_value_t = 80)]
        keystroke_ms: u64,
    },
    /// Show the available premium passes
    Plans,
    /// Sign in and persist the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and clear the persisted session
    Logout,
    /// Show the current subscription plan
    Status,
    /// Start a checkout for a pass (1_day, 1_month, 3_months)
    Checkout { plan: CheckoutPlan },
}

struct App {
    config: AppConfig,
    query: Arc<dyn MovieQueryService>,
    session: Arc<SessionContext>,
    subscription: Arc<SubscriptionStatusProvider>,
    accounts: AccountService,
}

impl App {
    async fn build(config: AppConfig, offline: bool) -> Result<Self, Box<dyn Error>> {
        let client = ApiClient::new(ApiClientConfig::from(&config.api))?;
        let store: Arc<dyn SessionStore> =
            Arc::new(FileSessionStore::new(&config.storage.session_file));

        let session = Arc::new(SessionContext::new(store.clone()));
        session.restore().await?;

        let subscription = Arc::new(SubscriptionStatusProvider::new(
            Arc::new(HttpSubscriptionApi::new(client.clone())),
            session.clone(),
            store,
            Arc::new(TracingNotifier::new()),
        ));
        let accounts = AccountService::new(
            Arc::new(HttpAccountApi::new(client.clone())),
            session.clone(),
            subscription.clone(),
        );
        let query: Arc<dyn MovieQueryService> = if offline {
            Arc::new(ScriptedMovieSource::demo())
        } else {
            Arc::new(HttpMovieApi::new(client))
        };

        Ok(Self {
            config,
            query,
            session,
            subscription,
            accounts,
        })
    }

    async fn plan(&self) -> Option<PlanType> {
        if self.session.is_authenticated() {
            self.subscription.ensure_loaded().await
        } else {
            None
        }
    }

    async fn browse(&self, genre: Option<String>, sort: Option<SortMode>, pages: u32) {
        let mut filter = self.config.listing.initial_filter();
        if let Some(genre) = genre {
            filter.genre = genre;
        }
        if let Some(sort) = sort {
            filter.sort_mode = sort;
        }

        let listing = ListingController::new(self.query.clone(), filter);
        listing.refresh().await;
        for _ in 1..pages {
            if listing.load_next_page().await.is_none() {
                break;
            }
        }

        let plan = self.plan().await;
        print_view(&ListingView::build(&listing.snapshot(), plan));
    }

    async fn search(&self, query: &str, keystroke: Duration) {
        let listing = ListingController::new(self.query.clone(), self.config.listing.initial_filter());
        let debouncer = SearchDebouncer::with_delay(
            Arc::new(listing.clone()),
            self.config.listing.debounce(),
        );

        let mut typed = String::new();
        for c in query.chars() {
            typed.push(c);
            debouncer.on_input_change(typed.clone());
            tokio::time::sleep(keystroke).await;
        }

        // Wait for the trailing search to fire and settle.
        tokio::time::sleep(debouncer.delay()).await;
        while listing.snapshot().loading {
            tokio::time::sleep(Duration::from_millis(25)).await;
        }

        let plan = self.plan().await;
        print_view(&ListingView::build(&listing.snapshot(), plan));
    }
}

fn print_view(view: &ListingView) {
    if let Some(message) = &view.empty_message {
        println!("{}", message);
        return;
    }
    if !view.continue_watching.is_empty() {
        let titles: Vec<&str> = view
            .continue_watching
            .iter()
            .map(|c| c.movie.title.as_str())
            .collect();
        println!("Continue watching: {}", titles.join(", "));
        println!();
    }
    for card in &view.cards {
        let movie = &card.movie;
        println!(
            "{:>5}  {:<32} {:<10} {:>4}  {:>4.1}{}",
            movie.id.to_string(),
            movie.title,
            movie.genre,
            movie.release_year,
            movie.rating,
            if card.locked { "  [premium]" } else { "" }
        );
    }
    println!();
    println!(
        "{} of {} movies{}",
        view.cards.len(),
        view.total_count,
        if view.has_more { " (more available)" } else { "" }
    );
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.client.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let _ = if config.client.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config);

    let app = App::build(config, cli.offline).await?;

    match cli.command {
        Commands::Browse { genre, sort, pages } => app.browse(genre, sort, pages.max(1)).await,
        Commands::Search { query, keystroke_ms } => {
            app.search(&query, Duration::from_millis(keystroke_ms)).await
        }
        Commands::Plans => {
            for plan in CheckoutPlan::ALL {
                println!("{:<10} {:<16} {}", plan.id(), plan.display_name(), plan.price());
            }
        }
        Commands::Login { email, password } => {
            let profile = app.accounts.login(&LoginForm::new(email, password)).await?;
            println!("Signed in as {} ({:?})", profile.display_name(), profile.role);
        }
        Commands::Logout => {
            app.accounts.logout().await?;
            println!("Signed out");
        }
        Commands::Status => {
            app.session.require_token()?;
            match app.subscription.refresh_status().await {
                Some(plan) => println!("Plan: {}", plan),
                None => println!("Plan: unknown"),
            }
        }
        Commands::Checkout { plan } => {
            let url = app.subscription.create_checkout(plan).await?;
            println!("Complete your purchase at {}", url);
        }
    }

    Ok(())
}
