//! Binary entry: wasm mount for the browser, stderr stub elsewhere.

#[cfg(target_arch = "wasm32")]
fn main() {
    eventa_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    let mut stderr = io::stderr().lock();
    stderr.write_all(
        b"eventa-ui targets wasm32; build with `trunk build` or `cargo build --target wasm32-unknown-unknown --features csr`.\n",
    )?;
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_main_writes_warning() -> std::io::Result<()> {
        // The native stub must run without panicking.
        main()
    }
}
