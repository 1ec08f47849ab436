use anyhow::Context;
use ec_core::edit::{edit_resource, resolve_editor, sanitize_edits};
use ec_core::k8s::{get_pod, pod_name_from_args, update_ephemeral_containers};
use ec_core::prelude::*;

#[derive(clap::Args)]
pub struct Args {
    #[arg(
        value_name = "POD",
        num_args = 1..=2,
        required = true,
        long_help = "pod to edit, as \"pod-name\", \"pod/pod-name\", or \"pod pod-name\""
    )]
    pub pod: Vec<String>,

    #[arg(
        short,
        long,
        long_help = "editor to use; if unset, falls back to $KUBE_EDITOR, then $EDITOR, then vi"
    )]
    pub editor: Option<String>,

    #[arg(long, long_help = "strip fields that are irrelevant when editing ephemeral containers")]
    pub minify: bool,
}

pub async fn cmd(args: &Args, client: kube::Client, namespace: Option<&str>) -> EmptyResult {
    let pod_name = pod_name_from_args(&args.pod)?;
    let namespace = namespace.unwrap_or_else(|| client.default_namespace()).to_owned();

    let mut pod = get_pod(client.clone(), &namespace, &pod_name).await?;
    if args.minify {
        pod = pod.minified();
    }

    let editor = resolve_editor(args.editor.as_deref());
    let edited = edit_resource(&editor, &pod)
        .await
        .with_context(|| format!("failed to edit pod/{pod_name}"))?;

    match sanitize_edits(&pod, &edited)? {
        Some(patch) => {
            update_ephemeral_containers(client, &patch).await?;
            println!("pod/{pod_name} successfully edited");
        },
        None => println!("Edit cancelled, no changes made to pod/{pod_name}"),
    }

    Ok(())
}
