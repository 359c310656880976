#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! FraudGuard dashboard wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() {
    fraudguard_ui::run_dashboard();
}

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_HINT: &str = "fraudguard-ui attaches scroll reveal, modal dismissal and form clearing \
to the dashboard page and only runs in a browser; build it with `trunk build` or \
`cargo build --target wasm32-unknown-unknown`.\n";

#[cfg(not(target_arch = "wasm32"))]
fn write_native_hint(out: &mut impl std::io::Write) -> std::io::Result<()> {
    out.write_all(NATIVE_HINT.as_bytes())?;
    out.flush()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    write_native_hint(&mut std::io::stderr().lock())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_hint_names_the_wasm_target() -> std::io::Result<()> {
        let mut out = Vec::new();
        write_native_hint(&mut out)?;
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("wasm32-unknown-unknown"));
        assert!(text.contains("trunk build"));
        assert!(text.ends_with('\n'));
        Ok(())
    }
}
