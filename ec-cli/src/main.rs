mod edit;
mod format;
mod list;
mod signals;

use std::time::Duration;

use clap::{crate_version, Parser, Subcommand};
use ec_core::logging;
use ec_core::prelude::*;

#[derive(Parser)]
#[command(
    name = "kubectl-ephemeral_containers",
    bin_name = "kubectl ephemeral-containers",
    about = "kubectl plugin to directly modify pods.spec.ephemeralContainers via the pod's ephemeralcontainers subresource",
    version,
    propagate_version = true
)]
struct EcCommandRoot {
    #[command(subcommand)]
    subcommand: EcSubcommand,

    #[arg(
        short,
        long,
        global = true,
        long_help = "namespace of the target pod(s); defaults to the kubeconfig namespace"
    )]
    namespace: Option<String>,

    #[arg(
        long,
        global = true,
        value_parser = humantime::parse_duration,
        long_help = "give up after this much time (e.g., 30s or 5m); no deadline if unset"
    )]
    request_timeout: Option<Duration>,

    #[arg(short, long, global = true, default_value = "warn")]
    verbosity: String,
}

#[derive(Subcommand)]
enum EcSubcommand {
    #[command(
        about = "edit the ephemeralContainers spec of a pod",
        visible_alias = "e"
    )]
    Edit(edit::Args),

    #[command(
        about = "list pods with ephemeral containers",
        visible_aliases = &["ls", "l"]
    )]
    List(list::Args),

    #[command(about = "kubectl-ephemeral-containers version")]
    Version,
}

async fn run_subcommand(args: &EcCommandRoot) -> EmptyResult {
    // The version subcommand doesn't need a kube client and shouldn't fail
    // just because no kubeconfig is around, so the client is constructed
    // inside the match.
    match &args.subcommand {
        EcSubcommand::Edit(edit_args) => {
            let client = kube::Client::try_default().await?;
            edit::cmd(edit_args, client, args.namespace.as_deref()).await
        },
        EcSubcommand::List(list_args) => {
            let client = kube::Client::try_default().await?;
            list::cmd(list_args, client, args.namespace.as_deref()).await
        },
        EcSubcommand::Version => {
            println!("kubectl-ephemeral-containers {}", crate_version!());
            Ok(())
        },
    }
}

#[tokio::main]
async fn main() -> EmptyResult {
    let args = EcCommandRoot::parse();
    logging::setup_for_cli(&args.verbosity);

    // Racing the command against the signal listener drops the in-flight
    // future on interrupt, which also tears down any spawned editor.
    tokio::select! {
        res = signals::with_deadline(args.request_timeout, run_subcommand(&args)) => res,
        err = signals::interrupted() => Err(err),
    }
}
