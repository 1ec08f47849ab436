// Editor resolution
pub const DEFAULT_EDITOR: &str = "vi";
pub const EDITOR_ENV_VAR: &str = "EDITOR";
pub const KUBE_EDITOR_ENV_VAR: &str = "KUBE_EDITOR";

// Scratch file holding the manifest during an interactive edit
pub const TMP_FILE_PREFIX: &str = "ephemeral-containers-";

// The pod subresource that accepts ephemeral-container updates
pub const EPHEMERAL_CONTAINERS_SUBRESOURCE: &str = "ephemeralcontainers";
