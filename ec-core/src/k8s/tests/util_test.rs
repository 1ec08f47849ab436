use super::*;

#[rstest]
#[case::bare_name(vec!["my-pod"], "my-pod")]
#[case::slash_form(vec!["pod/my-pod"], "my-pod")]
#[case::two_args(vec!["pods", "my-pod"], "my-pod")]
fn test_pod_name_from_args(#[case] args: Vec<&str>, #[case] expected: &str) {
    let args = args.into_iter().map(String::from).collect::<Vec<_>>();
    assert_eq!(pod_name_from_args(&args).unwrap(), expected);
}

#[rstest]
#[case::no_args(vec![])]
#[case::too_many_slashes(vec!["pod/my-ns/my-pod"])]
#[case::too_many_args(vec!["pod", "my-pod", "extra"])]
fn test_pod_name_from_args_malformed(#[case] args: Vec<&str>) {
    let args = args.into_iter().map(String::from).collect::<Vec<_>>();
    let err = pod_name_from_args(&args).unwrap_err().downcast().unwrap();
    assert!(matches!(err, KubernetesError::MalformedPodName(_)));
}

#[rstest]
fn test_namespaced_name(test_pod: corev1::Pod) {
    assert_eq!(test_pod.namespaced_name(), format!("{TEST_NAMESPACE}/{TEST_POD}"));
}
