use kube::Resource;

use super::*;
use crate::errors::*;
use crate::prelude::*;

impl<T: Resource> KubeResourceExt for T {
    fn namespaced_name(&self) -> String {
        match self.namespace() {
            Some(ns) => format!("{}/{}", ns, self.name_any()),
            None => self.name_any(),
        }
    }
}

// Accepted shapes: "pod-name", "pod/pod-name", or the two arguments
// "pod pod-name"
pub fn pod_name_from_args(args: &[String]) -> anyhow::Result<String> {
    match args {
        [single] => {
            let parts = single.split('/').collect::<Vec<_>>();
            match parts[..] {
                [name] => Ok(name.into()),
                [_, name] => Ok(name.into()),
                _ => bail!(KubernetesError::malformed_pod_name(single)),
            }
        },
        [_, name] => Ok(name.clone()),
        _ => bail!(KubernetesError::malformed_pod_name(&args.join(" "))),
    }
}
