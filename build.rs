use vergen::EmitBuilder;

// Embeds build and git metadata for the startup log line.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Git info is best effort: outside a checkout vergen emits defaults
    // and a cargo warning instead of failing the build.
    EmitBuilder::builder().all_build().all_git().emit()?;

    Ok(())
}
