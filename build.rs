fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");

    let build_date = chrono::Utc::now().format("%Y-%m-%d").to_string();

    let git_hash = std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    println!(
        "cargo:rustc-env=NAMESCAN_LONG_VERSION={} ({} {})",
        std::env::var("CARGO_PKG_VERSION").unwrap_or_default(),
        git_hash,
        build_date
    );
}
