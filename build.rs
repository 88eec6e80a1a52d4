use std::process::Command;

// Version metadata for the /info command. Every value degrades to an empty
// string when git is unavailable, e.g. when building from a source tarball.

fn git(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_default()
}

fn main() {
    // HEAD's tag, set only when building exactly on a release commit.
    let tag = git(&["describe", "--tags", "--exact-match"]);
    println!("cargo:rustc-env=RELEASE_VERSION={}", tag);

    // Latest release tag, used to describe dev builds.
    let latest = git(&["describe", "--tags", "--abbrev=0"]);
    println!("cargo:rustc-env=LATEST_TAG={}", latest);

    let ahead = if latest.is_empty() {
        String::new()
    } else {
        git(&["rev-list", "--count", &format!("{}..HEAD", latest)])
    };
    println!("cargo:rustc-env=COMMITS_AHEAD={}", ahead);
}
