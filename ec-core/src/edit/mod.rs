use std::env;
use std::fs;
use std::path::Path;
use std::process::Stdio;

use anyhow::Context;
use tokio::process::Command;
use tracing::debug;

use crate::errors::*;
use crate::k8s::EditableResource;
use crate::prelude::*;

err_impl! {EditError,
    #[error("pod name cannot be changed: {0}")]
    NameChanged(String),

    #[error("pod namespace cannot be changed: {0}")]
    NamespaceChanged(String),
}

// Pick the editor to run, in strict precedence order:
//   * --editor flag
//   * KUBE_EDITOR env var
//   * EDITOR env var
//   * vi
// Empty values are skipped, so this always produces a usable command.
pub fn resolve_editor(from_flag: Option<&str>) -> String {
    resolve_editor_from(from_flag, |var| env::var(var).ok())
}

fn resolve_editor_from(from_flag: Option<&str>, getenv: impl Fn(&str) -> Option<String>) -> String {
    [
        from_flag.map(String::from),
        getenv(KUBE_EDITOR_ENV_VAR),
        getenv(EDITOR_ENV_VAR),
    ]
    .into_iter()
    .flatten()
    .find(|source| !source.is_empty())
    .unwrap_or_else(|| DEFAULT_EDITOR.into())
}

// Run the editor attached to the invoking terminal and wait for it to exit.
pub async fn open_editor_for_file(editor: &str, path: &Path) -> EmptyResult {
    debug!("opening {} with `{editor}`", path.display());

    // If the surrounding future gets dropped (interrupt signal or deadline),
    // the child must not outlive us.
    let status = Command::new(editor)
        .arg(path)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true)
        .status()
        .await
        .with_context(|| format!("could not launch editor `{editor}`"))?;

    ensure!(status.success(), "editor `{editor}` exited with {status}");
    Ok(())
}

/// Round-trip a resource through the user's editor: serialize it to a scratch
/// file, let the editor run against it, and parse whatever comes back. The
/// scratch file is removed on every exit path, parse failures included.
pub async fn edit_resource<K: EditableResource>(editor: &str, obj: &K) -> anyhow::Result<K> {
    let file = tempfile::Builder::new()
        .prefix(TMP_FILE_PREFIX)
        .suffix(".yaml")
        .tempfile()?;
    fs::write(file.path(), serde_yaml::to_string(obj)?)?;

    open_editor_for_file(editor, file.path()).await?;

    // Read back by path; some editors replace the file instead of rewriting
    // it in place.
    let content = fs::read_to_string(file.path())?;
    serde_yaml::from_str(&content).context("could not parse edited manifest")
}

/// Validate an edit session's result against the original and compute the
/// update to apply: `None` if the editable field is untouched, otherwise the
/// minimal patch body. Identity changes are always an error.
pub fn sanitize_edits<K: EditableResource>(original: &K, edited: &K) -> anyhow::Result<Option<K>> {
    if edited.name() != original.name() {
        bail!(EditError::name_changed(&format!(
            "expected {}, got {}",
            original.name(),
            edited.name()
        )));
    }

    if edited.namespace() != original.namespace() {
        bail!(EditError::namespace_changed(&format!(
            "expected {}, got {}",
            original.namespace(),
            edited.namespace()
        )));
    }

    if original.unchanged(edited) {
        return Ok(None);
    }

    Ok(Some(original.minimal_patch(edited)))
}

#[cfg(test)]
pub mod tests;
