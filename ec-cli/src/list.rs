use ec_core::k8s::list_pods;
use ec_core::prelude::*;

use crate::format::{self, OutputFormat};

#[derive(clap::Args)]
pub struct Args {
    #[arg(short = 'A', long, long_help = "list pods across all namespaces")]
    pub all_namespaces: bool,

    #[arg(
        short,
        long,
        value_enum,
        default_value = "table",
        long_help = "format for the pod listing"
    )]
    pub output: OutputFormat,
}

pub async fn cmd(args: &Args, client: kube::Client, namespace: Option<&str>) -> EmptyResult {
    let namespace = if args.all_namespaces {
        None
    } else {
        Some(namespace.unwrap_or_else(|| client.default_namespace()).to_owned())
    };

    let pods = list_pods(client, namespace.as_deref(), |pod| pod.has_ephemeral_containers()).await?;

    match format::format_pod_list(args.output, &pods)? {
        Some(output) => println!("{output}"),
        None => match &namespace {
            Some(ns) => println!("No pods with ephemeral containers found in namespace {ns}"),
            None => println!("No pods with ephemeral containers found"),
        },
    }

    Ok(())
}
