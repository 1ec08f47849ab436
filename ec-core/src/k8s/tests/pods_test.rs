use httpmock::Method::*;

use super::*;

#[rstest]
#[tokio::test]
async fn test_get_pod(test_pod: corev1::Pod) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let pod = test_pod.clone();
    fake_apiserver.handle(move |when, then| {
        when.method(GET)
            .path(format!("/api/v1/namespaces/{TEST_NAMESPACE}/pods/{TEST_POD}"));
        then.json_body_obj(&pod);
    });

    let res = get_pod(client, TEST_NAMESPACE, TEST_POD).await.unwrap();

    assert_eq!(res, test_pod);
    fake_apiserver.assert();
}

#[rstest]
#[tokio::test]
async fn test_get_pod_not_found() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.handle_not_found(format!("/api/v1/namespaces/{TEST_NAMESPACE}/pods/{TEST_POD}"));

    let err = get_pod(client, TEST_NAMESPACE, TEST_POD).await.unwrap_err();

    assert_eq!(format!("{}", err.root_cause()), format!("pod not found: {TEST_NAMESPACE}/{TEST_POD}"));
    fake_apiserver.assert();
}

#[rstest]
#[tokio::test]
async fn test_list_pods_all_namespaces(test_pod: corev1::Pod, test_pod_with_debugger: corev1::Pod) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let body = pod_list_body(&[test_pod, test_pod_with_debugger.clone()]);
    fake_apiserver.handle(move |when, then| {
        when.method(GET).path("/api/v1/pods");
        then.json_body(body.clone());
    });

    let pods = list_pods(client, None, |pod| pod.has_ephemeral_containers()).await.unwrap();

    assert_eq!(pods, vec![test_pod_with_debugger]);
    fake_apiserver.assert();
}

#[rstest]
#[tokio::test]
async fn test_list_pods_namespaced(test_pod: corev1::Pod) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let body = pod_list_body(&[test_pod.clone()]);
    fake_apiserver.handle(move |when, then| {
        when.method(GET).path(format!("/api/v1/namespaces/{TEST_NAMESPACE}/pods"));
        then.json_body(body.clone());
    });

    let pods = list_pods(client, Some(TEST_NAMESPACE), |_| true).await.unwrap();

    assert_eq!(pods, vec![test_pod]);
    fake_apiserver.assert();
}

#[rstest]
#[tokio::test]
async fn test_update_ephemeral_containers(test_pod: corev1::Pod, test_pod_with_debugger: corev1::Pod) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let patch = test_pod.minimal_patch(&test_pod_with_debugger);

    let updated = test_pod_with_debugger.clone();
    fake_apiserver.handle(move |when, then| {
        when.method(PUT)
            .path(format!("/api/v1/namespaces/{TEST_NAMESPACE}/pods/{TEST_POD}/ephemeralcontainers"))
            .body_matches(TEST_DEBUG_CONTAINER);
        then.json_body_obj(&updated);
    });

    let res = update_ephemeral_containers(client, &patch).await.unwrap();

    assert_eq!(res.ephemeral_container_names(), vec![TEST_DEBUG_CONTAINER]);
    fake_apiserver.assert();
}

#[rstest]
#[tokio::test]
async fn test_update_ephemeral_containers_requires_identity(test_pod_with_debugger: corev1::Pod) {
    let (_fake_apiserver, client) = make_fake_apiserver();
    let mut patch = test_pod_with_debugger;
    patch.metadata.namespace = None;

    let err = update_ephemeral_containers(client, &patch).await.unwrap_err();

    assert_eq!(format!("{}", err.root_cause()), "field not found in struct: pod namespace");
}
