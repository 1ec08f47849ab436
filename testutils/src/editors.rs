use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

// An "editor" that overwrites its buffer with a canned manifest, so tests can
// drive the interactive step deterministically.
pub fn scripted_editor(dir: &Path, manifest: &str) -> String {
    let manifest_path = dir.join("manifest.yaml");
    fs::write(&manifest_path, manifest).unwrap();
    write_editor_script(dir, &format!("cp \"{}\" \"$1\"", manifest_path.display()))
}

// An "editor" running an arbitrary shell body; $1 is the buffer path.
pub fn write_editor_script(dir: &Path, body: &str) -> String {
    let script_path = dir.join("editor.sh");
    fs::write(&script_path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755)).unwrap();
    script_path.display().to_string()
}
