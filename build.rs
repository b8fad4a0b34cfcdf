fn main() {
    let git_output = std::process::Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .ok();
    let git_dir = git_output.as_ref().and_then(|output| {
        std::str::from_utf8(&output.stdout)
            .ok()
            .and_then(|s| s.strip_suffix('\n').or_else(|| s.strip_suffix("\r\n")))
    });

    // Rebuild when HEAD or refs move so the version string stays current.
    if let Some(git_dir) = git_dir {
        let git_path = std::path::Path::new(git_dir);
        for watched in ["HEAD", "packed-refs", "refs/heads", "refs/tags"] {
            if git_path.join(watched).exists() {
                println!("cargo:rerun-if-changed={git_dir}/{watched}");
            }
        }
    }
    println!("cargo:rerun-if-changed=.config/config.json5");

    let describe = std::process::Command::new("git")
        .args(["describe", "--always", "--tags", "--long", "--dirty"])
        .output()
        .ok();
    let git_info = describe
        .as_ref()
        .and_then(|output| std::str::from_utf8(&output.stdout).ok().map(str::trim))
        .filter(|info| !info.is_empty());

    if let Some(git_info) = git_info {
        println!("cargo:rustc-env=_GIT_INFO={git_info}");
    }
}
