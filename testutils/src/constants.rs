pub const TEST_NAMESPACE: &str = "test-namespace";
pub const TEST_POD: &str = "the-pod";
pub const TEST_DEBUG_POD: &str = "the-debugged-pod";
pub const TEST_DEBUG_CONTAINER: &str = "debugger";
