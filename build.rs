use std::env;
use std::process::Command;

fn main() {
    println!(
        "cargo:rustc-env=TARGET={}",
        env::var("TARGET").unwrap()
    );

    // Prefer an externally provided revision, for builds from a
    // source tarball without git metadata.
    match env::var("BUILD_REV") {
        Ok(rev) => {
            println!("cargo:rustc-env=BUILD_REV={}", rev);
        }
        Err(_) => match get_git_rev() {
            Ok(rev) => {
                println!("cargo:rustc-env=BUILD_REV={}", rev);
            }
            Err(err) => {
                eprintln!("Failed to get git revision: {}", err);
            }
        },
    }
}

fn get_git_rev() -> Result<String, Box<dyn std::error::Error>> {
    let output = Command::new("git")
        .arg("rev-parse")
        .arg("--short")
        .arg("HEAD")
        .output()?;
    let rev = String::from_utf8_lossy(&output.stdout);
    Ok(rev.trim().to_string())
}
