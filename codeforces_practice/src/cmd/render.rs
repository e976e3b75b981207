use crate::{
    cmd::{create_client, resolve_recent_size},
    modules::{page::ProblemListPage, pipeline::collect_required_problems},
};
use anyhow::{Context, Result};
use askama::Template;
use clap::Args;
use std::{ffi::OsString, path::PathBuf};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Path of the HTML file to write
    #[arg(short, long)]
    output: Option<OsString>,
    /// Number of recent finished Div. 2 / Div. 3 contests to pick problems from
    #[arg(long)]
    recent_size: Option<usize>,
}

pub async fn run(args: RenderArgs) -> Result<()> {
    let client = create_client()?;
    let recent_size = resolve_recent_size(args.recent_size)?;
    let output: PathBuf = args
        .output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("problems.html"));

    let page = match collect_required_problems(&client, recent_size).await {
        Ok(problems) => ProblemListPage::new(problems),
        Err(e) => {
            tracing::error!("failed to collect problems cause: {:?}", e);
            ProblemListPage::empty()
        }
    };

    let html = page.render()?;
    tokio::fs::write(&output, html).await.with_context(|| {
        let message = format!("failed to write {}", output.display());
        tracing::error!(message);
        message
    })?;

    tracing::info!("{} problems were written to {}", page.count, output.display());

    Ok(())
}
