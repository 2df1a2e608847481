use std::path::PathBuf;

use clap::Parser;
use mcq_bank::{bank, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory holding the lesson JSON files, one subdirectory per subject.
    #[arg(short, long, env, default_value = "data/mcqs")]
    data_dir: PathBuf,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "0.0.0.0:5000")]
    address: String,

    /// Seed every request's shuffles with this value instead of a random one.
    #[arg(long, env)]
    shuffle_seed: Option<u64>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tower=info,mcq_bank=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let tree = bank::load_dir(&args.data_dir)?;
    let bank = bank::QuestionBank::build(&tree);
    for lesson in bank.lessons() {
        tracing::info!("{}: {} questions", lesson.key, lesson.questions.len());
    }
    tracing::info!(
        "question bank ready: {} lessons, {} questions",
        bank.len(),
        bank.question_count()
    );

    let mut state = AppState::new(bank);
    state.shuffle_seed = args.shuffle_seed;
    let routes = mcq_bank::router(state);

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on http://{address}");
    axum::serve(listener, routes).await?;

    Ok(())
}
