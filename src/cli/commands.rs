use crate::cli::{Commands, GetArgs, ServeArgs, UpstreamArgs};
use crate::k8s::{resolve, K8sDirectory};
use crate::server::{self, AppState};
use crate::status::{Representation, StatusFetcher};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub async fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Serve(args) => handle_serve(args).await,
        Commands::Get(args) => handle_get(args).await,
    }
}

async fn connect(upstream: &UpstreamArgs) -> Result<(K8sDirectory, StatusFetcher)> {
    let directory = K8sDirectory::try_default(upstream.directory_timeout()).await?;
    let fetcher = StatusFetcher::with_agent_port(upstream.fetch_timeout(), upstream.agent_port)
        .context("Failed to build HTTP client")?;
    Ok((directory, fetcher))
}

async fn handle_serve(args: ServeArgs) -> Result<()> {
    info!(
        "Fetch timeout {:?}, directory timeout {:?}, agent port {}",
        args.upstream.fetch_timeout(),
        args.upstream.directory_timeout(),
        args.upstream.agent_port
    );

    let (directory, fetcher) = connect(&args.upstream).await?;
    let state = AppState {
        directory: Arc::new(directory),
        fetcher,
    };

    let listener = TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("Failed to bind {}", args.listen))?;

    server::serve(listener, state).await
}

async fn handle_get(args: GetArgs) -> Result<()> {
    let target = args.pod_ref();
    info!("Status requested for {}", target);

    let (directory, fetcher) = connect(&args.upstream).await?;

    let pod = resolve(&directory, &target).await?;
    let representation = Representation::negotiate(&args.accept)?;
    let payload = fetcher.fetch(&pod, representation).await?;

    println!("{}", payload.render_text()?);
    Ok(())
}
