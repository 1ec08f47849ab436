mod pod_ext;
mod pods;
mod util;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use pods::*;
pub use util::*;

use crate::errors::*;
use crate::prelude::*;

err_impl! {KubernetesError,
    #[error("field not found in struct: {0}")]
    FieldNotFound(String),

    #[error("invalid pod name: {0}")]
    MalformedPodName(String),

    #[error("pod not found: {0}")]
    PodNotFound(String),
}

/// A resource whose single editable field can be round-tripped through an
/// external editor and pushed back through a subresource update. The identity
/// accessors and the patch constructor are all the sanitizer needs, so other
/// resource kinds can plug in later without touching the edit flow.
pub trait EditableResource: Clone + Serialize + DeserializeOwned {
    fn name(&self) -> String;
    fn namespace(&self) -> String;

    /// True if the editable field is unchanged between `self` and `edited`
    /// (order-sensitive, element-wise).
    fn unchanged(&self, edited: &Self) -> bool;

    /// The minimal update body: identity fields plus `edited`'s editable
    /// field, nothing else. Anything more risks clobbering fields the
    /// apiserver tracks on its own.
    fn minimal_patch(&self, edited: &Self) -> Self;
}

pub trait KubeResourceExt {
    fn namespaced_name(&self) -> String;
}

pub trait PodExt {
    fn ephemeral_containers(&self) -> &[corev1::EphemeralContainer];
    fn ephemeral_container_names(&self) -> Vec<String>;
    fn has_ephemeral_containers(&self) -> bool;
    fn minified(&self) -> corev1::Pod;
}

#[cfg(test)]
pub mod tests;
