use super::*;
use crate::prelude::*;

impl EditableResource for corev1::Pod {
    fn name(&self) -> String {
        self.metadata.name.clone().unwrap_or_default()
    }

    fn namespace(&self) -> String {
        self.metadata.namespace.clone().unwrap_or_default()
    }

    fn unchanged(&self, edited: &Self) -> bool {
        self.ephemeral_containers() == edited.ephemeral_containers()
    }

    fn minimal_patch(&self, edited: &Self) -> Self {
        corev1::Pod {
            metadata: metav1::ObjectMeta {
                name: self.metadata.name.clone(),
                namespace: self.metadata.namespace.clone(),
                ..Default::default()
            },
            spec: Some(corev1::PodSpec {
                ephemeral_containers: edited.spec.as_ref().and_then(|spec| spec.ephemeral_containers.clone()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

impl PodExt for corev1::Pod {
    fn ephemeral_containers(&self) -> &[corev1::EphemeralContainer] {
        self.spec
            .as_ref()
            .and_then(|spec| spec.ephemeral_containers.as_deref())
            .unwrap_or_default()
    }

    fn ephemeral_container_names(&self) -> Vec<String> {
        self.ephemeral_containers().iter().map(|c| c.name.clone()).collect()
    }

    fn has_ephemeral_containers(&self) -> bool {
        !self.ephemeral_containers().is_empty()
    }

    // Identity plus the one editable field; everything else is noise in the
    // editor buffer.
    fn minified(&self) -> corev1::Pod {
        self.minimal_patch(self)
    }
}
