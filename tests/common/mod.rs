use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn enjour_cmd() -> Command {
    let mut cmd = Command::cargo_bin("enjour").unwrap();
    cmd.env_remove("ENJOUR_ROOT");
    cmd.env_remove("ENJOUR_LOG");
    cmd
}

#[allow(dead_code)]
pub fn write_note(root: &Path, file_name: &str, body: &str) {
    fs::write(
        root.join(file_name),
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<en-note>{}</en-note>\n",
            body
        ),
    )
    .unwrap();
}
