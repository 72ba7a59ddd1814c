use std::process::Command;

/// Exposes the short commit hash as `GIT_COMMIT_HASH` for `pager --version`.
fn main() {
    println!("cargo::rerun-if-env-changed=GIT_COMMIT_HASH");
    println!("cargo::rerun-if-changed=../../.git/HEAD");

    let from_env = std::env::var("GIT_COMMIT_HASH").ok().filter(|s| !s.is_empty());
    let commit = from_env.or_else(git_short_hash);
    println!(
        "cargo::rustc-env=GIT_COMMIT_HASH={}",
        commit.as_deref().unwrap_or("unknown")
    );
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
