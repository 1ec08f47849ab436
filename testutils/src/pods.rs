use k8s_openapi::api::core::v1 as corev1;
use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
use rstest::fixture;

use crate::constants::*;

pub fn debug_container(name: &str) -> corev1::EphemeralContainer {
    corev1::EphemeralContainer {
        name: name.into(),
        image: Some("busybox:1.36".into()),
        command: Some(vec!["sh".into()]),
        stdin: Some(true),
        tty: Some(true),
        ..Default::default()
    }
}

#[fixture]
pub fn test_pod(#[default(TEST_POD)] name: &str) -> corev1::Pod {
    corev1::Pod {
        metadata: metav1::ObjectMeta {
            name: Some(name.into()),
            namespace: Some(TEST_NAMESPACE.into()),
            ..Default::default()
        },
        spec: Some(corev1::PodSpec {
            containers: vec![corev1::Container {
                name: "app".into(),
                image: Some("nginx:1.27".into()),
                ..Default::default()
            }],
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[fixture]
pub fn test_pod_with_debugger(#[default(TEST_DEBUG_POD)] name: &str) -> corev1::Pod {
    let mut pod = test_pod(name);
    pod.spec.as_mut().unwrap().ephemeral_containers = Some(vec![debug_container(TEST_DEBUG_CONTAINER)]);
    pod
}
