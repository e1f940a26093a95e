use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tokio::net::TcpListener;
use tracing::info;
use warbler_config::load as load_config;
use warbler_gateway::build_router;
use warbler_runtime::{telemetry, PageServices};
use warbler_social::{Directory, MessageId, UserId};

#[derive(Parser)]
#[command(name = "warbler-server")]
#[command(about = "Warbler page server (serves by default)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Validate the snapshot and print per-user counts
    Check,
    /// Print the markup of a single view
    Render {
        #[arg(value_enum)]
        view: ViewKind,
        /// User or message id, depending on the view
        id: i64,
        /// Render as this session user
        #[arg(long = "as")]
        viewer: Option<i64>,
        /// Include the likes counter in the stats view
        #[arg(long)]
        likes: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ViewKind {
    UserCard,
    Message,
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server().await,
        Commands::Check => check_snapshot(),
        Commands::Render {
            view,
            id,
            viewer,
            likes,
        } => render(view, id, viewer, likes),
    }
}

async fn run_server() -> Result<()> {
    telemetry::init_tracing().context("failed to initialise tracing")?;

    info!("starting Warbler page server");

    let config = load_config().context("failed to load configuration")?;
    let services = PageServices::initialise(&config).context("failed to initialise services")?;
    let app = build_router(services.gateway_state(&config)?);

    let address = format!("{}:{}", config.http.address, config.http.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind http listener on {address}"))?;

    info!(%address, "http server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(warbler_runtime::shutdown_signal())
        .await
        .context("http server error")?;

    info!("page server shut down");
    Ok(())
}

fn check_snapshot() -> Result<()> {
    let config = load_config().context("failed to load configuration")?;
    let services = PageServices::initialise(&config).context("failed to initialise services")?;
    let directory = &services.directory;

    println!(
        "snapshot OK: {} users, {} messages",
        directory.user_count(),
        directory.message_count()
    );
    println!(
        "{:<6} {:<20} {:>9} {:>10} {:>10} {:>6}",
        "ID", "Username", "Messages", "Following", "Followers", "Likes"
    );
    println!("{}", "-".repeat(66));

    for user in directory.users() {
        let stats = user.stats;
        println!(
            "{:<6} {:<20} {:>9} {:>10} {:>10} {:>6}",
            user.id, user.username, stats.messages, stats.following, stats.followers, stats.likes
        );
    }

    Ok(())
}

fn render(view: ViewKind, id: i64, viewer: Option<i64>, likes: bool) -> Result<()> {
    let config = load_config().context("failed to load configuration")?;
    let services = PageServices::initialise(&config).context("failed to initialise services")?;

    let markup = render_view(&services.directory, view, id, viewer, likes)?;
    println!("{markup}");
    Ok(())
}

fn render_view(
    directory: &Directory,
    view: ViewKind,
    id: i64,
    viewer: Option<i64>,
    include_likes: bool,
) -> Result<String> {
    let viewer = viewer.map(UserId);
    if let Some(viewer) = viewer {
        if directory.user(viewer).is_none() {
            anyhow::bail!("unknown session user {viewer}");
        }
    }
    let session = directory.session_for(viewer);

    let markup = match view {
        ViewKind::UserCard => {
            let user = directory
                .user(UserId(id))
                .with_context(|| format!("user {id} not found"))?;
            warbler_views::user_card(user, &session)
        }
        ViewKind::Stats => {
            let user = directory
                .user(UserId(id))
                .with_context(|| format!("user {id} not found"))?;
            warbler_views::user_stats(user, include_likes)
        }
        ViewKind::Message => {
            let message = directory
                .message(MessageId(id))
                .with_context(|| format!("message {id} not found"))?;
            let author = directory
                .user(message.author)
                .with_context(|| format!("author of message {id} not found"))?;
            warbler_views::message_item(message, author, &session)
        }
    };

    Ok(markup.into_string())
}
