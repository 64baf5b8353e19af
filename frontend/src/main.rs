#[cfg(target_arch = "wasm32")]
fn main() {
    storeadmin_frontend::boot();
}

// The console only runs in the browser; the native binary exists so the
// crate's host-side tests build as a workspace member.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
