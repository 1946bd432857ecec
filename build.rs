use vergen_git2::{Emitter, Git2Builder};

fn main() -> anyhow::Result<()> {
    // cause i cannot figure out how to uppercase a str literal at compile time
    println!(
        "cargo::rustc-env=CARGO_PKG_NAME_UPPERCASE={}",
        env!("CARGO_PKG_NAME").to_ascii_uppercase()
    );

    let git2 = Git2Builder::default().sha(true).commit_date(true).build()?;

    // NOTE: no fail_on_error, tarball builds outside git get placeholder values
    Emitter::default().add_instructions(&git2)?.emit()
}
