use assert_cmd::Command;

pub fn export_cmd() -> Command {
    let mut cmd = Command::cargo_bin("eleventy-export").unwrap();
    cmd.env_remove("NO_COLOR");
    cmd
}
