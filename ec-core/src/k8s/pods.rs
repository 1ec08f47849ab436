use kube::api::{ListParams, PostParams};
use tracing::debug;

use super::*;
use crate::errors::*;
use crate::prelude::*;

pub async fn get_pod(client: kube::Client, namespace: &str, name: &str) -> anyhow::Result<corev1::Pod> {
    let pod_api = kube::Api::<corev1::Pod>::namespaced(client, namespace);
    match pod_api.get_opt(name).await? {
        Some(pod) => Ok(pod),
        None => bail!(KubernetesError::pod_not_found(&format!("{namespace}/{name}"))),
    }
}

// A `None` namespace means "all namespaces"
pub async fn list_pods(
    client: kube::Client,
    namespace: Option<&str>,
    filter: impl Fn(&corev1::Pod) -> bool,
) -> anyhow::Result<Vec<corev1::Pod>> {
    let pod_api = match namespace {
        Some(ns) => kube::Api::<corev1::Pod>::namespaced(client, ns),
        None => kube::Api::<corev1::Pod>::all(client),
    };

    let pods = pod_api.list(&ListParams::default()).await?;
    Ok(pods.into_iter().filter(|pod| filter(pod)).collect())
}

// The subresource replace is atomic on the whole ephemeralContainers list,
// which is why the patch body must carry nothing but identity and that list.
pub async fn update_ephemeral_containers(
    client: kube::Client,
    patch: &corev1::Pod,
) -> anyhow::Result<corev1::Pod> {
    let namespace = patch
        .metadata
        .namespace
        .clone()
        .ok_or(KubernetesError::field_not_found("pod namespace"))?;
    let name = patch
        .metadata
        .name
        .clone()
        .ok_or(KubernetesError::field_not_found("pod name"))?;

    debug!("replacing {} subresource for {}", EPHEMERAL_CONTAINERS_SUBRESOURCE, patch.namespaced_name());
    let pod_api = kube::Api::<corev1::Pod>::namespaced(client, &namespace);
    let pod = pod_api
        .replace_subresource(
            EPHEMERAL_CONTAINERS_SUBRESOURCE,
            &name,
            &PostParams::default(),
            serde_json::to_vec(patch)?,
        )
        .await?;
    Ok(pod)
}
